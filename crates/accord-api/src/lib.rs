//! # accord-api
//!
//! axum router exposing CRUD for every contract-records table, nested list
//! routes that follow the schema's parent links, and a JSON Schema endpoint.
//!
//! ```text
//! GET    /{resource}              list (?skip, limit, sortby, search)
//! POST   /{resource}              create
//! GET    /{resource}/{id}         read
//! PUT    /{resource}/{id}         replace
//! DELETE /{resource}/{id}         delete
//! GET    /{parent}/{id}/{child}   children of a parent row
//! GET    /schema/{resource}       JSON Schema
//! ```

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use accord_core::entities::{Deliverable, Invoice, Milestone, Msa, Sow, Status, Vendor};
use accord_db::resource::Resource;
use accord_db::service::AccordService;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccordService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: AccordService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route("/schema/:resource", get(handlers::schema))
        .merge(resource_routes::<Vendor>())
        .merge(resource_routes::<Status>())
        .merge(resource_routes::<Msa>())
        .merge(resource_routes::<Sow>())
        .merge(resource_routes::<Invoice>())
        .merge(resource_routes::<Milestone>())
        .merge(resource_routes::<Deliverable>());

    api.fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// CRUD routes for `R`, plus `/{parent}/:id/{R}` when `R` has a parent.
///
/// The collection answers both with and without a trailing slash.
fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/{}", R::KIND.route());
    let collection = || get(handlers::list::<R>).post(handlers::create::<R>);
    let router = Router::new()
        .route(&base, collection())
        .route(&format!("{base}/"), collection())
        .route(
            &format!("{base}/:id"),
            get(handlers::read::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::remove::<R>),
        );

    match R::PARENT {
        Some(parent) => router.route(
            &format!("/{}/:id{base}", parent.kind.route()),
            get(handlers::list_children::<R>),
        ),
        None => router,
    }
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "accord API listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
