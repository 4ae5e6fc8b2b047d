//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, equipment_types, health, inspection_statuses, inspections, managers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GestEPI API",
        version = "0.1.0",
        description = "PPE inventory and inspection tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment types
        equipment_types::list_equipment_types,
        equipment_types::get_equipment_type,
        equipment_types::create_equipment_type,
        equipment_types::update_equipment_type,
        equipment_types::delete_equipment_type,
        // Managers
        managers::list_managers,
        managers::get_manager,
        managers::create_manager,
        managers::update_manager,
        managers::delete_manager,
        // Inspection statuses
        inspection_statuses::list_inspection_statuses,
        inspection_statuses::get_inspection_status,
        inspection_statuses::create_inspection_status,
        inspection_statuses::update_inspection_status,
        inspection_statuses::delete_inspection_status,
        // Equipment
        equipment::list_equipment,
        equipment::list_due_equipment,
        equipment::due_summary,
        equipment::get_equipment,
        equipment::list_equipment_inspections,
        equipment::get_equipment_schedule,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Inspections
        inspections::list_inspections,
        inspections::get_inspection,
        inspections::create_inspection,
        inspections::update_inspection,
        inspections::delete_inspection,
    ),
    components(
        schemas(
            crate::models::equipment_type::EquipmentType,
            crate::models::equipment_type::EquipmentTypeInput,
            crate::models::manager::Manager,
            crate::models::manager::ManagerSummary,
            crate::models::manager::ManagerInput,
            crate::models::inspection_status::InspectionStatus,
            crate::models::inspection_status::InspectionStatusInput,
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentSummary,
            crate::models::equipment::EquipmentInput,
            crate::models::inspection::Inspection,
            crate::models::inspection::InspectionInput,
            crate::models::schedule::Urgency,
            crate::models::schedule::InspectionSchedule,
            crate::models::schedule::DueEquipment,
            crate::models::schedule::EquipmentSchedule,
            crate::models::schedule::DueSummary,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment-types", description = "Equipment categories and default inspection intervals"),
        (name = "managers", description = "Inspectors"),
        (name = "inspection-statuses", description = "Inspection outcomes"),
        (name = "equipment", description = "PPE items and due inspections"),
        (name = "inspections", description = "Inspection records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
