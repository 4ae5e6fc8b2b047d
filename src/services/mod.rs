//! Business logic services

pub mod due;
pub mod equipment;
pub mod equipment_types;
pub mod inspection_statuses;
pub mod inspections;
pub mod managers;

use crate::{config::InspectionsConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment_types: equipment_types::EquipmentTypesService,
    pub managers: managers::ManagersService,
    pub inspection_statuses: inspection_statuses::InspectionStatusesService,
    pub equipment: equipment::EquipmentService,
    pub inspections: inspections::InspectionsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, inspections_config: InspectionsConfig) -> Self {
        Self {
            equipment_types: equipment_types::EquipmentTypesService::new(repository.clone()),
            managers: managers::ManagersService::new(repository.clone()),
            inspection_statuses: inspection_statuses::InspectionStatusesService::new(
                repository.clone(),
            ),
            equipment: equipment::EquipmentService::new(repository.clone(), inspections_config),
            inspections: inspections::InspectionsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database is reachable
    pub async fn ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
