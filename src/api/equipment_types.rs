//! Equipment type API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::equipment_type::{EquipmentType, EquipmentTypeInput},
    AppState,
};

use super::{IdPath, ListResponse, MessageResponse, ValidatedJson};

/// List all equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment-types",
    responses(
        (status = 200, description = "Equipment type list, or a message when there is none", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<EquipmentType>>> {
    let types = state.services.equipment_types.list().await?;
    Ok(Json(ListResponse::new(types, "No equipment type registered")))
}

/// Get equipment type by ID
#[utoipa::path(
    get,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type details", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn get_equipment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.equipment_types.get_by_id(id).await?;
    Ok(Json(equipment_type))
}

/// Create equipment type
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    request_body = EquipmentTypeInput,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_equipment_type(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<EquipmentTypeInput>,
) -> AppResult<(StatusCode, Json<EquipmentType>)> {
    let equipment_type = state.services.equipment_types.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment_type)))
}

/// Replace equipment type
#[utoipa::path(
    put,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    request_body = EquipmentTypeInput,
    responses(
        (status = 200, description = "Equipment type updated", body = EquipmentType),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn update_equipment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<EquipmentTypeInput>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.equipment_types.update(id, &data).await?;
    Ok(Json(equipment_type))
}

/// Delete equipment type
#[utoipa::path(
    delete,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type deleted", body = MessageResponse),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Equipment still uses this type")
    )
)]
pub async fn delete_equipment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment_types.delete(id).await?;
    Ok(MessageResponse::new(format!("Equipment type {} deleted", id)))
}
