//! Inspection statuses service

use crate::{
    error::AppResult,
    models::inspection_status::{InspectionStatus, InspectionStatusInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct InspectionStatusesService {
    repository: Repository,
}

impl InspectionStatusesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<InspectionStatus>> {
        self.repository.inspection_statuses.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<InspectionStatus> {
        self.repository.inspection_statuses.get_by_id(id).await
    }

    pub async fn create(&self, data: &InspectionStatusInput) -> AppResult<InspectionStatus> {
        let created = self.repository.inspection_statuses.create(data).await?;
        tracing::info!(id = created.id, "Inspection status created");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &InspectionStatusInput,
    ) -> AppResult<InspectionStatus> {
        let updated = self.repository.inspection_statuses.update(id, data).await?;
        tracing::info!(id, "Inspection status updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.inspection_statuses.delete(id).await?;
        tracing::info!(id, "Inspection status deleted");
        Ok(())
    }
}
