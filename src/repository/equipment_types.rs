//! Equipment types repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{EquipmentType, EquipmentTypeInput},
};

#[derive(Clone)]
pub struct EquipmentTypesRepository {
    pool: Pool<Postgres>,
}

impl EquipmentTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment types
    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        let rows =
            sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types ORDER BY label")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get equipment type by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_types WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create equipment type
    pub async fn create(&self, data: &EquipmentTypeInput) -> AppResult<EquipmentType> {
        let row = sqlx::query_as::<_, EquipmentType>(
            r#"
            INSERT INTO equipment_types (label, inspection_interval_days, is_textile)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.label)
        .bind(data.inspection_interval_days)
        .bind(data.is_textile)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field of an equipment type
    pub async fn update(&self, id: i32, data: &EquipmentTypeInput) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>(
            r#"
            UPDATE equipment_types
            SET label = $1, inspection_interval_days = $2, is_textile = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.label)
        .bind(data.inspection_interval_days)
        .bind(data.is_textile)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    /// Delete equipment type
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_delete(&format!("Equipment type {}", id)))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment type {} not found", id)));
        }
        Ok(())
    }
}
