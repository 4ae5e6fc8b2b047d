//! Inspections service

use crate::{
    error::{AppError, AppResult},
    models::inspection::{Inspection, InspectionInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct InspectionsService {
    repository: Repository,
}

impl InspectionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Inspection>> {
        self.repository.inspections.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Inspection> {
        self.repository.inspections.get_by_id(id).await
    }

    /// Record an inspection and return it with its references expanded
    pub async fn create(&self, data: &InspectionInput) -> AppResult<Inspection> {
        self.check_references(data).await?;
        let id = self.repository.inspections.create(data).await?;
        tracing::info!(
            id,
            equipment_id = data.equipment_id,
            status_id = data.status_id,
            "Inspection recorded"
        );
        self.repository.inspections.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, data: &InspectionInput) -> AppResult<Inspection> {
        self.check_references(data).await?;
        self.repository.inspections.update(id, data).await?;
        tracing::info!(id, "Inspection updated");
        self.repository.inspections.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.inspections.delete(id).await?;
        tracing::info!(id, "Inspection deleted");
        Ok(())
    }

    async fn check_references(&self, data: &InspectionInput) -> AppResult<()> {
        let mut missing = Vec::new();
        if !self.repository.equipment.exists(data.equipment_id).await? {
            missing.push(format!("equipment {}", data.equipment_id));
        }
        if !self.repository.managers.exists(data.manager_id).await? {
            missing.push(format!("manager {}", data.manager_id));
        }
        if !self.repository.inspection_statuses.exists(data.status_id).await? {
            missing.push(format!("inspection status {}", data.status_id));
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!("Unknown {}", missing.join(", "))))
        }
    }
}
