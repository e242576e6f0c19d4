use accord_config::AccordConfig;
use accord_db::AccordDb;
use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Opening the database applies the embedded schema.
pub async fn handle(config: &AccordConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    AccordDb::open(&config.database)
        .await
        .context("failed to migrate database")?;

    if flags.quiet {
        return Ok(());
    }
    let target = if config.database.is_remote() {
        &config.database.url
    } else {
        &config.database.path
    };
    output(
        &json!({"message": "schema is up to date", "database": target}),
        flags.format,
    )
}
