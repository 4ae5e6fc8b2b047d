//! Equipment (individual PPE item) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::equipment_type::EquipmentType;

/// Internal row structure for equipment queries joined with their type
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentRow {
    id: i32,
    internal_id: String,
    brand: String,
    model: String,
    serial_number: String,
    size: Option<String>,
    color: Option<String>,
    purchase_date: Option<NaiveDate>,
    manufacture_date: Option<NaiveDate>,
    commissioning_date: Option<NaiveDate>,
    inspection_interval_days: Option<i32>,
    equipment_type_id: i32,
    type_label: String,
    type_inspection_interval_days: i32,
    type_is_textile: bool,
    last_inspection_date: Option<NaiveDate>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment {
            id: row.id,
            internal_id: row.internal_id,
            brand: row.brand,
            model: row.model,
            serial_number: row.serial_number,
            size: row.size,
            color: row.color,
            purchase_date: row.purchase_date,
            manufacture_date: row.manufacture_date,
            commissioning_date: row.commissioning_date,
            inspection_interval_days: row.inspection_interval_days,
            equipment_type_id: row.equipment_type_id,
            equipment_type: EquipmentType {
                id: row.equipment_type_id,
                label: row.type_label,
                inspection_interval_days: row.type_inspection_interval_days,
                is_textile: row.type_is_textile,
            },
            last_inspection_date: row.last_inspection_date,
        }
    }
}

/// Equipment item with its type and most recent inspection date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Organisation-specific identifier painted or stitched on the item
    pub internal_id: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub manufacture_date: Option<NaiveDate>,
    pub commissioning_date: Option<NaiveDate>,
    /// Overrides the type's interval when set
    pub inspection_interval_days: Option<i32>,
    pub equipment_type_id: i32,
    pub equipment_type: EquipmentType,
    /// Derived from the inspections table, never stored on the item
    pub last_inspection_date: Option<NaiveDate>,
}

/// Equipment fields embedded in inspection records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentSummary {
    pub id: i32,
    pub internal_id: String,
    pub brand: String,
    pub model: String,
}

/// Create or replace an equipment item
///
/// Updates replace every field: an optional field left out of the body is
/// written back as null.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EquipmentInput {
    #[validate(length(min = 1, message = "Internal identifier is required"))]
    pub internal_id: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub manufacture_date: Option<NaiveDate>,
    pub commissioning_date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "Inspection interval must be a positive number of days"))]
    pub inspection_interval_days: Option<i32>,
    pub equipment_type_id: i32,
}
