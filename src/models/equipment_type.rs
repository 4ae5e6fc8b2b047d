//! Equipment type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Category of protective equipment with its default inspection interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub id: i32,
    pub label: String,
    /// Default number of days between two inspections
    pub inspection_interval_days: i32,
    /// Textile items must be retired ten years after manufacture
    pub is_textile: bool,
}

/// Create or replace an equipment type
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EquipmentTypeInput {
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
    #[validate(range(min = 1, message = "Inspection interval must be a positive number of days"))]
    pub inspection_interval_days: i32,
    #[serde(default)]
    pub is_textile: bool,
}
