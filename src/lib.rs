//! GestEPI server
//!
//! REST JSON API for tracking personal protective equipment, its periodic
//! inspections, and which items are overdue or due for inspection soon.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around an already created database pool
    pub fn new(config: AppConfig, pool: sqlx::PgPool) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, config.inspections.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
