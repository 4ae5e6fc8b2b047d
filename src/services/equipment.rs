//! Equipment service

use chrono::{NaiveDate, Utc};

use crate::{
    config::InspectionsConfig,
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentInput},
        inspection::Inspection,
        schedule::{DueEquipment, DueSummary, EquipmentSchedule},
    },
    repository::Repository,
};

use super::due;

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    config: InspectionsConfig,
}

impl EquipmentService {
    pub fn new(repository: Repository, config: InspectionsConfig) -> Self {
        Self { repository, config }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create equipment and return it with its type expanded
    pub async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        self.check_type(data.equipment_type_id).await?;
        let id = self.repository.equipment.create(data).await?;
        tracing::info!(id, internal_id = %data.internal_id, "Equipment created");
        self.repository.equipment.get_by_id(id).await
    }

    /// Replace every field of an equipment item and return the stored version
    pub async fn update(&self, id: i32, data: &EquipmentInput) -> AppResult<Equipment> {
        self.check_type(data.equipment_type_id).await?;
        self.repository.equipment.update(id, data).await?;
        tracing::info!(id, "Equipment updated");
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(id, "Equipment deleted");
        Ok(())
    }

    /// Inspections recorded for one item, most recent first
    pub async fn inspections(&self, id: i32) -> AppResult<Vec<Inspection>> {
        if !self.repository.equipment.exists(id).await? {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        self.repository.inspections.list_for_equipment(id).await
    }

    /// Next inspection of one item
    pub async fn schedule(&self, id: i32) -> AppResult<EquipmentSchedule> {
        let equipment = self.repository.equipment.get_by_id(id).await?;
        Ok(EquipmentSchedule {
            equipment_id: equipment.id,
            last_inspection_date: equipment.last_inspection_date,
            commissioning_date: equipment.commissioning_date,
            schedule: due::schedule(&equipment, today(), self.config.upcoming_window_days),
        })
    }

    /// Items whose next inspection falls within `threshold_days` (or is overdue)
    pub async fn due(&self, threshold_days: Option<i64>) -> AppResult<Vec<DueEquipment>> {
        let threshold = self.threshold(threshold_days);
        let equipment = self.repository.equipment.list().await?;
        let due = due::due_list(equipment, today(), threshold, self.config.upcoming_window_days);
        tracing::debug!(threshold, count = due.len(), "Computed due inspections");
        Ok(due)
    }

    pub async fn due_summary(&self, threshold_days: Option<i64>) -> AppResult<DueSummary> {
        let threshold = self.threshold(threshold_days);
        let due = self.due(Some(threshold)).await?;
        Ok(due::summarize(&due, threshold))
    }

    fn threshold(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.config.default_threshold_days)
    }

    async fn check_type(&self, equipment_type_id: i32) -> AppResult<()> {
        if !self.repository.equipment_types.exists(equipment_type_id).await? {
            return Err(AppError::Validation(format!(
                "Equipment type {} does not exist",
                equipment_type_id
            )));
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
