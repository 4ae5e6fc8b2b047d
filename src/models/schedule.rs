//! Inspection schedule and due-list types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::equipment::Equipment;

/// Display bucket of a computed due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due date already passed
    Overdue,
    /// Due within the upcoming window
    Upcoming,
    Current,
}

/// Next inspection of one equipment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InspectionSchedule {
    /// Last inspection date, or commissioning date when never inspected
    pub reference_date: NaiveDate,
    pub interval_days: i32,
    pub next_due_date: NaiveDate,
    /// Negative when overdue
    pub days_remaining: i64,
    pub urgency: Urgency,
}

/// Equipment item appearing in the due list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DueEquipment {
    pub equipment: Equipment,
    pub schedule: InspectionSchedule,
}

/// Schedule view for a single item; `schedule` is null when no due date can be computed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentSchedule {
    pub equipment_id: i32,
    pub last_inspection_date: Option<NaiveDate>,
    pub commissioning_date: Option<NaiveDate>,
    pub schedule: Option<InspectionSchedule>,
}

/// Counts per urgency bucket for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DueSummary {
    pub threshold_days: i64,
    pub total: usize,
    pub overdue: usize,
    pub upcoming: usize,
    pub current: usize,
}

/// Due list query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DueQuery {
    /// Include items due within this many days (default: 30)
    #[validate(range(min = 0, max = 3650, message = "Threshold must be between 0 and 3650 days"))]
    pub days_threshold: Option<i64>,
}
