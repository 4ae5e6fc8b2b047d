//! Managers service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::manager::{Manager, ManagerInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct ManagersService {
    repository: Repository,
}

impl ManagersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Manager>> {
        self.repository.managers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Manager> {
        self.repository.managers.get_by_id(id).await
    }

    /// Create a manager, storing an argon2 hash of the password
    pub async fn create(&self, data: &ManagerInput) -> AppResult<Manager> {
        if let Some(existing) = self.repository.managers.get_by_email(&data.email).await? {
            tracing::warn!(existing_id = existing.id, "Email already used by another manager");
        }

        let hash = hash_password(&data.password)?;
        let created = self.repository.managers.create(data, &hash).await?;
        tracing::info!(id = created.id, "Manager created");
        Ok(created)
    }

    /// Replace a manager; the password is always re-hashed
    pub async fn update(&self, id: i32, data: &ManagerInput) -> AppResult<Manager> {
        if let Some(existing) = self.repository.managers.get_by_email(&data.email).await? {
            if existing.id != id {
                tracing::warn!(
                    existing_id = existing.id,
                    id,
                    "Email already used by another manager"
                );
            }
        }

        let hash = hash_password(&data.password)?;
        let updated = self.repository.managers.update(id, data, &hash).await?;
        tracing::info!(id, "Manager updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.managers.delete(id).await?;
        tracing::info!(id, "Manager deleted");
        Ok(())
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
