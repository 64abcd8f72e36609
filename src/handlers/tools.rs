use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::db::{Tool, ToolFields};
use crate::error::CmsError;
use crate::middleware::auth::AdminSession;
use crate::router::CmsState;
use crate::types::api::{Ack, JsonBody};

/// GET /api/tools
pub async fn list_tools(State(state): State<CmsState>) -> Result<Json<Vec<Tool>>, CmsError> {
    Ok(Json(state.store.get_all_tools().await?))
}

/// GET /api/tools/{id}
pub async fn get_tool(
    State(state): State<CmsState>,
    Path(id): Path<String>,
) -> Result<Json<Tool>, CmsError> {
    Ok(Json(state.store.get_tool_by_id(&id).await?))
}

/// PUT /api/tools/{id} -> full overwrite of every mutable field.
pub async fn update_tool(
    State(state): State<CmsState>,
    admin: AdminSession,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<ToolFields>,
) -> Result<Json<Ack>, CmsError> {
    state.store.update_tool(&id, &fields).await?;
    info!(tool_id = %id, username = %admin.username, "tool updated");
    Ok(Json(Ack::ok()))
}
