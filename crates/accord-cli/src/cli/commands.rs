use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the REST API server.
    Serve(ServeArgs),
    /// Open the configured database and apply the schema.
    Migrate,
    /// Master Service Agreements.
    Msa {
        #[command(subcommand)]
        action: MsaCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum MsaCommands {
    /// List MSAs one page at a time.
    List {
        /// Rows to skip.
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Page size (server default when omitted).
        #[arg(long)]
        limit: Option<u32>,
        /// Sort expression, e.g. `title:desc`.
        #[arg(long)]
        sort: Option<String>,
        /// Case-insensitive text filter.
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete an MSA and everything that cascades from it.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
