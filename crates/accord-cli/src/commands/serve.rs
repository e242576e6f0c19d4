use accord_api::AppState;
use accord_config::AccordConfig;
use accord_db::service::AccordService;
use anyhow::Context;
use tokio::net::TcpListener;

use crate::cli::ServeArgs;

pub async fn handle(args: &ServeArgs, mut config: AccordConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let service = AccordService::from_config(&config)
        .await
        .context("failed to open database")?;

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    accord_api::serve(listener, AppState::new(service), accord_api::shutdown_signal())
        .await
        .context("server error")
}
