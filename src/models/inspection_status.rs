//! Inspection status model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Outcome of an inspection (operational, needs repair, scrapped, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InspectionStatus {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InspectionStatusInput {
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
}
