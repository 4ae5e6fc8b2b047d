//! Inspection API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::inspection::{Inspection, InspectionInput},
    AppState,
};

use super::{IdPath, ListResponse, MessageResponse, ValidatedJson};

/// List all inspections, most recent first
#[utoipa::path(
    get,
    path = "/inspections",
    tag = "inspections",
    responses(
        (status = 200, description = "Inspection list, or a message when there is none", body = Vec<Inspection>)
    )
)]
pub async fn list_inspections(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Inspection>>> {
    let inspections = state.services.inspections.list().await?;
    Ok(Json(ListResponse::new(inspections, "No inspection recorded")))
}

/// Get inspection by ID
#[utoipa::path(
    get,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection with manager, equipment and status", body = Inspection),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn get_inspection(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Inspection>> {
    let inspection = state.services.inspections.get_by_id(id).await?;
    Ok(Json(inspection))
}

/// Record an inspection
#[utoipa::path(
    post,
    path = "/inspections",
    tag = "inspections",
    request_body = InspectionInput,
    responses(
        (status = 201, description = "Inspection recorded", body = Inspection),
        (status = 400, description = "Invalid input or unknown reference")
    )
)]
pub async fn create_inspection(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<InspectionInput>,
) -> AppResult<(StatusCode, Json<Inspection>)> {
    let inspection = state.services.inspections.create(&data).await?;
    Ok((StatusCode::CREATED, Json(inspection)))
}

/// Replace an inspection
#[utoipa::path(
    put,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    request_body = InspectionInput,
    responses(
        (status = 200, description = "Inspection updated", body = Inspection),
        (status = 400, description = "Invalid input or unknown reference"),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn update_inspection(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<InspectionInput>,
) -> AppResult<Json<Inspection>> {
    let inspection = state.services.inspections.update(id, &data).await?;
    Ok(Json(inspection))
}

/// Delete an inspection
#[utoipa::path(
    delete,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection deleted", body = MessageResponse),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn delete_inspection(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.inspections.delete(id).await?;
    Ok(MessageResponse::new(format!("Inspection {} deleted", id)))
}
