//! Inspections repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::inspection::{Inspection, InspectionInput, InspectionRow},
};

const INSPECTION_SELECT: &str = r#"
    SELECT c.id, c.inspection_date, c.remarks, c.manager_id, c.equipment_id, c.status_id,
           c.created_at,
           m.surname AS manager_surname, m.first_name AS manager_first_name,
           e.internal_id AS equipment_internal_id, e.brand AS equipment_brand,
           e.model AS equipment_model,
           s.label AS status_label
    FROM inspections c
    JOIN managers m ON c.manager_id = m.id
    JOIN equipment e ON c.equipment_id = e.id
    JOIN inspection_statuses s ON c.status_id = s.id
"#;

#[derive(Clone)]
pub struct InspectionsRepository {
    pool: Pool<Postgres>,
}

impl InspectionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all inspections, most recent first
    pub async fn list(&self) -> AppResult<Vec<Inspection>> {
        let query = format!("{} ORDER BY c.inspection_date DESC, c.id DESC", INSPECTION_SELECT);
        let rows = sqlx::query_as::<_, InspectionRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Inspection::from).collect())
    }

    /// Inspections of one equipment item, most recent first
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<Inspection>> {
        let query = format!(
            "{} WHERE c.equipment_id = $1 ORDER BY c.inspection_date DESC, c.id DESC",
            INSPECTION_SELECT
        );
        let rows = sqlx::query_as::<_, InspectionRow>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Inspection::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Inspection> {
        let query = format!("{} WHERE c.id = $1", INSPECTION_SELECT);
        sqlx::query_as::<_, InspectionRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Inspection::from)
            .ok_or_else(|| AppError::NotFound(format!("Inspection {} not found", id)))
    }

    /// Insert an inspection and return its generated ID
    pub async fn create(&self, data: &InspectionInput) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO inspections (inspection_date, remarks, manager_id, equipment_id, status_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(data.inspection_date)
        .bind(&data.remarks)
        .bind(data.manager_id)
        .bind(data.equipment_id)
        .bind(data.status_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replace every field of an inspection
    pub async fn update(&self, id: i32, data: &InspectionInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE inspections SET
                inspection_date = $1, remarks = $2, manager_id = $3,
                equipment_id = $4, status_id = $5
            WHERE id = $6
            "#,
        )
        .bind(data.inspection_date)
        .bind(&data.remarks)
        .bind(data.manager_id)
        .bind(data.equipment_id)
        .bind(data.status_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inspections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection {} not found", id)));
        }
        Ok(())
    }
}
