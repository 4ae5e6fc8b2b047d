//! Equipment repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentInput, EquipmentRow},
};

/// Equipment joined with its type and the date of its most recent inspection
const EQUIPMENT_SELECT: &str = r#"
    SELECT e.id, e.internal_id, e.brand, e.model, e.serial_number, e.size, e.color,
           e.purchase_date, e.manufacture_date, e.commissioning_date,
           e.inspection_interval_days, e.equipment_type_id,
           t.label AS type_label,
           t.inspection_interval_days AS type_inspection_interval_days,
           t.is_textile AS type_is_textile,
           li.last_inspection_date
    FROM equipment e
    JOIN equipment_types t ON e.equipment_type_id = t.id
    LEFT JOIN (
        SELECT equipment_id, MAX(inspection_date) AS last_inspection_date
        FROM inspections
        GROUP BY equipment_id
    ) li ON li.equipment_id = e.id
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment with type and last inspection date
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let query = format!("{} ORDER BY e.internal_id, e.id", EQUIPMENT_SELECT);
        let rows = sqlx::query_as::<_, EquipmentRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        let query = format!("{} WHERE e.id = $1", EQUIPMENT_SELECT);
        sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Equipment::from)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert equipment and return its generated ID
    pub async fn create(&self, data: &EquipmentInput) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO equipment (
                internal_id, brand, model, serial_number, size, color,
                purchase_date, manufacture_date, commissioning_date,
                inspection_interval_days, equipment_type_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&data.internal_id)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.size)
        .bind(&data.color)
        .bind(data.purchase_date)
        .bind(data.manufacture_date)
        .bind(data.commissioning_date)
        .bind(data.inspection_interval_days)
        .bind(data.equipment_type_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replace every field of an equipment item
    pub async fn update(&self, id: i32, data: &EquipmentInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment SET
                internal_id = $1, brand = $2, model = $3, serial_number = $4,
                size = $5, color = $6, purchase_date = $7, manufacture_date = $8,
                commissioning_date = $9, inspection_interval_days = $10,
                equipment_type_id = $11
            WHERE id = $12
            "#,
        )
        .bind(&data.internal_id)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.size)
        .bind(&data.color)
        .bind(data.purchase_date)
        .bind(data.manufacture_date)
        .bind(data.commissioning_date)
        .bind(data.inspection_interval_days)
        .bind(data.equipment_type_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Delete equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_delete(&format!("Equipment {}", id)))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
