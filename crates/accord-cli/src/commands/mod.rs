pub mod migrate;
pub mod msa;
pub mod serve;

use accord_config::AccordConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: AccordConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Migrate => migrate::handle(&config, flags).await,
        Commands::Msa { action } => msa::handle(&action, &config, flags).await,
    }
}
