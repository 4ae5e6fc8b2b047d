//! Inspection (periodic check) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    equipment::EquipmentSummary, inspection_status::InspectionStatus, manager::ManagerSummary,
};

/// Internal row structure for inspection queries joined with their references
#[derive(Debug, Clone, FromRow)]
pub struct InspectionRow {
    id: i32,
    inspection_date: NaiveDate,
    remarks: Option<String>,
    manager_id: i32,
    equipment_id: i32,
    status_id: i32,
    created_at: DateTime<Utc>,
    manager_surname: String,
    manager_first_name: String,
    equipment_internal_id: String,
    equipment_brand: String,
    equipment_model: String,
    status_label: String,
}

impl From<InspectionRow> for Inspection {
    fn from(row: InspectionRow) -> Self {
        Inspection {
            id: row.id,
            inspection_date: row.inspection_date,
            remarks: row.remarks,
            manager_id: row.manager_id,
            equipment_id: row.equipment_id,
            status_id: row.status_id,
            created_at: row.created_at,
            manager: ManagerSummary {
                id: row.manager_id,
                surname: row.manager_surname,
                first_name: row.manager_first_name,
            },
            equipment: EquipmentSummary {
                id: row.equipment_id,
                internal_id: row.equipment_internal_id,
                brand: row.equipment_brand,
                model: row.equipment_model,
            },
            status: InspectionStatus {
                id: row.status_id,
                label: row.status_label,
            },
        }
    }
}

/// Inspection with its manager, equipment and status expanded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Inspection {
    pub id: i32,
    pub inspection_date: NaiveDate,
    pub remarks: Option<String>,
    pub manager_id: i32,
    pub equipment_id: i32,
    pub status_id: i32,
    pub created_at: DateTime<Utc>,
    pub manager: ManagerSummary,
    pub equipment: EquipmentSummary,
    pub status: InspectionStatus,
}

/// Create or replace an inspection
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InspectionInput {
    pub inspection_date: NaiveDate,
    #[validate(length(max = 4000, message = "Remarks are limited to 4000 characters"))]
    pub remarks: Option<String>,
    pub manager_id: i32,
    pub equipment_id: i32,
    pub status_id: i32,
}
