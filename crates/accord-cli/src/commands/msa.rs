use std::io::{BufRead, Write};

use accord_client::{ApiClient, MsaListView};
use accord_config::AccordConfig;
use accord_core::query::ListQuery;
use accord_core::responses::MessageResponse;
use anyhow::Context;

use crate::cli::{GlobalFlags, MsaCommands};
use crate::output::{output, render_page};

const MSA_COLUMNS: &[&str] = &[
    "id",
    "title",
    "vendor_id",
    "start_date",
    "end_date",
    "document",
];

pub async fn handle(
    action: &MsaCommands,
    config: &AccordConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = client(config, flags)?;
    match action {
        MsaCommands::List {
            skip,
            limit,
            sort,
            search,
        } => {
            let query = ListQuery {
                skip: *skip,
                limit: *limit,
                sortby: sort.clone(),
                search: search.clone(),
            };
            list(&client, &query, flags).await
        }
        MsaCommands::Delete { id, yes } => {
            let prompt = format!("Delete MSA {id} and its SOWs, milestones and deliverables?");
            if !*yes && !confirm(&prompt)? {
                if !flags.quiet {
                    eprintln!("Cancelled.");
                }
                return Ok(());
            }
            delete(client, *id, flags).await
        }
    }
}

fn client(config: &AccordConfig, flags: &GlobalFlags) -> anyhow::Result<ApiClient> {
    let mut client_config = config.client.clone();
    if let Some(url) = &flags.api_url {
        client_config.base_url.clone_from(url);
    }
    ApiClient::new(&client_config).context("failed to build API client")
}

async fn list(client: &ApiClient, query: &ListQuery, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = client
        .list_msas(query)
        .await
        .with_context(|| format!("failed to list MSAs from {}", client.base_url()))?;
    println!("{}", render_page(&page, MSA_COLUMNS, flags.format)?);
    Ok(())
}

/// Delete through the list view so the CLI reports exactly what the page would.
async fn delete(client: ApiClient, id: i64, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = MsaListView::new(client, 1);
    view.request_delete(id);
    view.confirm_delete().await;

    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }
    if flags.quiet {
        return Ok(());
    }
    let message = view.success().unwrap_or_default().to_string();
    output(&MessageResponse { message }, flags.format)
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let stdin = std::io::stdin();
    confirm_from(prompt, &mut stdin.lock(), &mut std::io::stderr())
}

fn confirm_from(
    prompt: &str,
    input: &mut impl BufRead,
    prompt_out: &mut impl Write,
) -> anyhow::Result<bool> {
    write!(prompt_out, "{prompt} [y/N] ")?;
    prompt_out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(text: &str) -> bool {
        let mut sink = Vec::new();
        confirm_from("Delete?", &mut Cursor::new(text.as_bytes()), &mut sink).unwrap()
    }

    #[test]
    fn confirmation_accepts_yes_only() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
        assert!(!answer("\n"));
        assert!(!answer("n\n"));
        assert!(!answer("maybe\n"));
        assert!(!answer(""));
    }

    #[test]
    fn api_url_flag_overrides_config() {
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Json,
            quiet: false,
            verbose: false,
            api_url: Some("http://10.1.2.3:9000".into()),
        };
        let client = client(&AccordConfig::default(), &flags).unwrap();
        assert_eq!(client.base_url().as_str(), "http://10.1.2.3:9000/");
    }
}
