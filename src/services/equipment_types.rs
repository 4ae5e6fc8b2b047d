//! Equipment types service

use crate::{
    error::AppResult,
    models::equipment_type::{EquipmentType, EquipmentTypeInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentTypesService {
    repository: Repository,
}

impl EquipmentTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        self.repository.equipment_types.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentType> {
        self.repository.equipment_types.get_by_id(id).await
    }

    pub async fn create(&self, data: &EquipmentTypeInput) -> AppResult<EquipmentType> {
        let created = self.repository.equipment_types.create(data).await?;
        tracing::info!(id = created.id, label = %created.label, "Equipment type created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, data: &EquipmentTypeInput) -> AppResult<EquipmentType> {
        let updated = self.repository.equipment_types.update(id, data).await?;
        tracing::info!(id, "Equipment type updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment_types.delete(id).await?;
        tracing::info!(id, "Equipment type deleted");
        Ok(())
    }
}
