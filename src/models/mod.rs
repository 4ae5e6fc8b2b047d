//! Data models for GestEPI

pub mod equipment;
pub mod equipment_type;
pub mod inspection;
pub mod inspection_status;
pub mod manager;
pub mod schedule;

// Re-export commonly used types
pub use equipment::{Equipment, EquipmentSummary};
pub use equipment_type::EquipmentType;
pub use inspection::Inspection;
pub use inspection_status::InspectionStatus;
pub use manager::{Manager, ManagerSummary};
pub use schedule::{DueEquipment, DueSummary, InspectionSchedule, Urgency};
