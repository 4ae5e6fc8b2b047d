//! Inspection statuses repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::inspection_status::{InspectionStatus, InspectionStatusInput},
};

#[derive(Clone)]
pub struct InspectionStatusesRepository {
    pool: Pool<Postgres>,
}

impl InspectionStatusesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<InspectionStatus>> {
        let rows =
            sqlx::query_as::<_, InspectionStatus>("SELECT * FROM inspection_statuses ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<InspectionStatus> {
        sqlx::query_as::<_, InspectionStatus>("SELECT * FROM inspection_statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inspection status {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inspection_statuses WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn create(&self, data: &InspectionStatusInput) -> AppResult<InspectionStatus> {
        let row = sqlx::query_as::<_, InspectionStatus>(
            "INSERT INTO inspection_statuses (label) VALUES ($1) RETURNING *",
        )
        .bind(&data.label)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &InspectionStatusInput,
    ) -> AppResult<InspectionStatus> {
        sqlx::query_as::<_, InspectionStatus>(
            "UPDATE inspection_statuses SET label = $1 WHERE id = $2 RETURNING *",
        )
        .bind(&data.label)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inspection status {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inspection_statuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_delete(&format!("Inspection status {}", id)))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection status {} not found", id)));
        }
        Ok(())
    }
}
