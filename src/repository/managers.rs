//! Managers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::manager::{Manager, ManagerInput},
};

#[derive(Clone)]
pub struct ManagersRepository {
    pool: Pool<Postgres>,
}

impl ManagersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all managers
    pub async fn list(&self) -> AppResult<Vec<Manager>> {
        let rows =
            sqlx::query_as::<_, Manager>("SELECT * FROM managers ORDER BY surname, first_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get manager by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Manager> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Manager {} not found", id)))
    }

    /// Get manager by email (emails are not unique, the oldest account wins)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Manager>> {
        let manager = sqlx::query_as::<_, Manager>(
            "SELECT * FROM managers WHERE LOWER(email) = LOWER($1) ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(manager)
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM managers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Create manager with an already hashed password
    pub async fn create(&self, data: &ManagerInput, password_hash: &str) -> AppResult<Manager> {
        let row = sqlx::query_as::<_, Manager>(
            r#"
            INSERT INTO managers (surname, first_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.surname)
        .bind(&data.first_name)
        .bind(&data.email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field of a manager
    pub async fn update(
        &self,
        id: i32,
        data: &ManagerInput,
        password_hash: &str,
    ) -> AppResult<Manager> {
        sqlx::query_as::<_, Manager>(
            r#"
            UPDATE managers
            SET surname = $1, first_name = $2, email = $3, password_hash = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.surname)
        .bind(&data.first_name)
        .bind(&data.email)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Manager {} not found", id)))
    }

    /// Delete manager
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM managers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_delete(&format!("Manager {}", id)))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Manager {} not found", id)));
        }
        Ok(())
    }
}
