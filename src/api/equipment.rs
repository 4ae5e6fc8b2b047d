//! Equipment API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentInput},
        inspection::Inspection,
        schedule::{DueEquipment, DueQuery, DueSummary, EquipmentSchedule},
    },
    AppState,
};

use super::{IdPath, ListResponse, MessageResponse, ValidatedJson, ValidatedQuery};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list, or a message when there is none", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(ListResponse::new(equipment, "No equipment registered")))
}

/// List equipment whose next inspection is overdue or due within the threshold
#[utoipa::path(
    get,
    path = "/equipment/due",
    tag = "equipment",
    params(DueQuery),
    responses(
        (status = 200, description = "Due equipment, most urgent first, or a message when there is none", body = Vec<DueEquipment>),
        (status = 400, description = "Invalid threshold")
    )
)]
pub async fn list_due_equipment(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DueQuery>,
) -> AppResult<Json<ListResponse<DueEquipment>>> {
    let due = state.services.equipment.due(query.days_threshold).await?;
    Ok(Json(ListResponse::new(due, "No equipment needs an inspection soon")))
}

/// Count due equipment per urgency bucket
#[utoipa::path(
    get,
    path = "/equipment/due/summary",
    tag = "equipment",
    params(DueQuery),
    responses(
        (status = 200, description = "Due counts", body = DueSummary),
        (status = 400, description = "Invalid threshold")
    )
)]
pub async fn due_summary(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DueQuery>,
) -> AppResult<Json<DueSummary>> {
    let summary = state.services.equipment.due_summary(query.days_threshold).await?;
    Ok(Json(summary))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// List the inspections of one equipment item
#[utoipa::path(
    get,
    path = "/equipment/{id}/inspections",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Inspections, most recent first, or a message when there is none", body = Vec<Inspection>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_inspections(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ListResponse<Inspection>>> {
    let inspections = state.services.equipment.inspections(id).await?;
    Ok(Json(ListResponse::new(
        inspections,
        &format!("No inspection recorded for equipment {}", id),
    )))
}

/// Next inspection of one equipment item
#[utoipa::path(
    get,
    path = "/equipment/{id}/schedule",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Schedule (null when no due date can be computed)", body = EquipmentSchedule),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment_schedule(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<EquipmentSchedule>> {
    let schedule = state.services.equipment.schedule(id).await?;
    Ok(Json(schedule))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = EquipmentInput,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid input or unknown equipment type")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<EquipmentInput>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Replace equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentInput,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Invalid input or unknown equipment type"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<EquipmentInput>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Equipment still has inspections")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment.delete(id).await?;
    Ok(MessageResponse::new(format!("Equipment {} deleted", id)))
}
