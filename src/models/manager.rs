//! Manager (inspector) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Person allowed to perform inspections
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Manager {
    pub id: i32,
    pub surname: String,
    pub first_name: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Manager fields embedded in inspection records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManagerSummary {
    pub id: i32,
    pub surname: String,
    pub first_name: String,
}

/// Create or replace a manager
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ManagerInput {
    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plain password, hashed before storage
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
