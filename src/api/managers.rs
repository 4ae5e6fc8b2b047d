//! Manager API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::manager::{Manager, ManagerInput},
    AppState,
};

use super::{IdPath, ListResponse, MessageResponse, ValidatedJson};

/// List all managers
#[utoipa::path(
    get,
    path = "/managers",
    tag = "managers",
    responses(
        (status = 200, description = "Manager list, or a message when there is none", body = Vec<Manager>)
    )
)]
pub async fn list_managers(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Manager>>> {
    let managers = state.services.managers.list().await?;
    Ok(Json(ListResponse::new(managers, "No manager registered")))
}

/// Get manager by ID
#[utoipa::path(
    get,
    path = "/managers/{id}",
    tag = "managers",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager details", body = Manager),
        (status = 404, description = "Manager not found")
    )
)]
pub async fn get_manager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Manager>> {
    let manager = state.services.managers.get_by_id(id).await?;
    Ok(Json(manager))
}

/// Create manager
#[utoipa::path(
    post,
    path = "/managers",
    tag = "managers",
    request_body = ManagerInput,
    responses(
        (status = 201, description = "Manager created", body = Manager),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_manager(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<ManagerInput>,
) -> AppResult<(StatusCode, Json<Manager>)> {
    let manager = state.services.managers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(manager)))
}

/// Replace manager
#[utoipa::path(
    put,
    path = "/managers/{id}",
    tag = "managers",
    params(("id" = i32, Path, description = "Manager ID")),
    request_body = ManagerInput,
    responses(
        (status = 200, description = "Manager updated", body = Manager),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Manager not found")
    )
)]
pub async fn update_manager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<ManagerInput>,
) -> AppResult<Json<Manager>> {
    let manager = state.services.managers.update(id, &data).await?;
    Ok(Json(manager))
}

/// Delete manager
#[utoipa::path(
    delete,
    path = "/managers/{id}",
    tag = "managers",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager deleted", body = MessageResponse),
        (status = 404, description = "Manager not found"),
        (status = 409, description = "Manager still has inspections")
    )
)]
pub async fn delete_manager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.managers.delete(id).await?;
    Ok(MessageResponse::new(format!("Manager {} deleted", id)))
}
