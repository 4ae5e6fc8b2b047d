//! Inspection status API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::inspection_status::{InspectionStatus, InspectionStatusInput},
    AppState,
};

use super::{IdPath, ListResponse, MessageResponse, ValidatedJson};

/// List all inspection statuses
#[utoipa::path(
    get,
    path = "/inspection-statuses",
    tag = "inspection-statuses",
    responses(
        (status = 200, description = "Status list, or a message when there is none", body = Vec<InspectionStatus>)
    )
)]
pub async fn list_inspection_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<InspectionStatus>>> {
    let statuses = state.services.inspection_statuses.list().await?;
    Ok(Json(ListResponse::new(statuses, "No inspection status registered")))
}

#[utoipa::path(
    get,
    path = "/inspection-statuses/{id}",
    tag = "inspection-statuses",
    params(("id" = i32, Path, description = "Inspection status ID")),
    responses(
        (status = 200, description = "Inspection status", body = InspectionStatus),
        (status = 404, description = "Inspection status not found")
    )
)]
pub async fn get_inspection_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<InspectionStatus>> {
    let status = state.services.inspection_statuses.get_by_id(id).await?;
    Ok(Json(status))
}

#[utoipa::path(
    post,
    path = "/inspection-statuses",
    tag = "inspection-statuses",
    request_body = InspectionStatusInput,
    responses(
        (status = 201, description = "Inspection status created", body = InspectionStatus),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_inspection_status(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<InspectionStatusInput>,
) -> AppResult<(StatusCode, Json<InspectionStatus>)> {
    let status = state.services.inspection_statuses.create(&data).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

#[utoipa::path(
    put,
    path = "/inspection-statuses/{id}",
    tag = "inspection-statuses",
    params(("id" = i32, Path, description = "Inspection status ID")),
    request_body = InspectionStatusInput,
    responses(
        (status = 200, description = "Inspection status updated", body = InspectionStatus),
        (status = 404, description = "Inspection status not found")
    )
)]
pub async fn update_inspection_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<InspectionStatusInput>,
) -> AppResult<Json<InspectionStatus>> {
    let status = state.services.inspection_statuses.update(id, &data).await?;
    Ok(Json(status))
}

#[utoipa::path(
    delete,
    path = "/inspection-statuses/{id}",
    tag = "inspection-statuses",
    params(("id" = i32, Path, description = "Inspection status ID")),
    responses(
        (status = 200, description = "Inspection status deleted", body = MessageResponse),
        (status = 404, description = "Inspection status not found"),
        (status = 409, description = "Status still used by inspections")
    )
)]
pub async fn delete_inspection_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.inspection_statuses.delete(id).await?;
    Ok(MessageResponse::new(format!("Inspection status {} deleted", id)))
}
