//! Request handlers.
//!
//! CRUD handlers are generic over [`Resource`]; the router instantiates them
//! once per table.

use accord_core::entities::{Deliverable, Invoice, Milestone, Msa, Sow, Status, Vendor};
use accord_core::enums::EntityKind;
use accord_core::query::ListQuery;
use accord_core::responses::{ListResponse, MessageResponse};
use accord_db::resource::Resource;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::ApiError;

pub const WELCOME: &str = "Welcome to the Accord contract-records API!";

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME.to_string(),
    })
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<R>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.service.list::<R>(&query).await?))
}

/// Children of one parent row, e.g. `GET /msas/3/sows`.
pub async fn list_children<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<R>>, ApiError> {
    let Path(parent_id) = path?;
    let Query(query) = query?;
    Ok(Json(state.service.list_by_parent::<R>(parent_id, &query).await?))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<R>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.service.get::<R>(id).await?))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let Json(input) = body?;
    let created = state.service.create::<R>(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    Ok(Json(state.service.update::<R>(id, &input).await?))
}

pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.service.delete::<R>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// JSON Schema of a resource's entity type.
pub async fn schema(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<schemars::Schema>, ApiError> {
    let Path(resource) = path?;
    let kind: EntityKind = resource.parse()?;
    let schema = match kind {
        EntityKind::Vendor => schemars::schema_for!(Vendor),
        EntityKind::Status => schemars::schema_for!(Status),
        EntityKind::Msa => schemars::schema_for!(Msa),
        EntityKind::Sow => schemars::schema_for!(Sow),
        EntityKind::Invoice => schemars::schema_for!(Invoice),
        EntityKind::Milestone => schemars::schema_for!(Milestone),
        EntityKind::Deliverable => schemars::schema_for!(Deliverable),
    };
    Ok(Json(schema))
}
