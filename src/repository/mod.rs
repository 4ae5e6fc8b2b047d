//! Repository layer for database operations

pub mod equipment;
pub mod equipment_types;
pub mod inspection_statuses;
pub mod inspections;
pub mod managers;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub managers: managers::ManagersRepository,
    pub inspection_statuses: inspection_statuses::InspectionStatusesRepository,
    pub equipment: equipment::EquipmentRepository,
    pub inspections: inspections::InspectionsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment_types: equipment_types::EquipmentTypesRepository::new(pool.clone()),
            managers: managers::ManagersRepository::new(pool.clone()),
            inspection_statuses: inspection_statuses::InspectionStatusesRepository::new(
                pool.clone(),
            ),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            inspections: inspections::InspectionsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
