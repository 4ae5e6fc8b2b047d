//! API handlers for GestEPI REST endpoints

pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod inspection_statuses;
pub mod inspections;
pub mod managers;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, HeaderValue},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, AppState};

/// Numeric record ID taken from the path.
///
/// Anything that is not a positive integer cannot name a record, so it is
/// answered with 404 like an unknown ID.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(IdPath)
            .ok_or_else(|| AppError::NotFound(format!("No record with id {}", raw)))
    }
}

/// JSON body that is deserialized then checked with its `validator` rules
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self(value))
    }
}

/// Query string that is deserialized then checked with its `validator` rules
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self(value))
    }
}

/// List body: the rows, or a message object when there are none
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Items(Vec<T>),
    Empty { message: String },
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, empty_message: &str) -> Self {
        if items.is_empty() {
            ListResponse::Empty {
                message: empty_message.to_string(),
            }
        } else {
            ListResponse::Items(items)
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment types
        .route(
            "/equipment-types",
            get(equipment_types::list_equipment_types).post(equipment_types::create_equipment_type),
        )
        .route(
            "/equipment-types/:id",
            get(equipment_types::get_equipment_type)
                .put(equipment_types::update_equipment_type)
                .delete(equipment_types::delete_equipment_type),
        )
        // Managers
        .route("/managers", get(managers::list_managers).post(managers::create_manager))
        .route(
            "/managers/:id",
            get(managers::get_manager)
                .put(managers::update_manager)
                .delete(managers::delete_manager),
        )
        // Inspection statuses
        .route(
            "/inspection-statuses",
            get(inspection_statuses::list_inspection_statuses)
                .post(inspection_statuses::create_inspection_status),
        )
        .route(
            "/inspection-statuses/:id",
            get(inspection_statuses::get_inspection_status)
                .put(inspection_statuses::update_inspection_status)
                .delete(inspection_statuses::delete_inspection_status),
        )
        // Equipment
        .route("/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route("/equipment/due", get(equipment::list_due_equipment))
        .route("/equipment/due/summary", get(equipment::due_summary))
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/inspections", get(equipment::list_equipment_inspections))
        .route("/equipment/:id/schedule", get(equipment::get_equipment_schedule))
        // Inspections
        .route(
            "/inspections",
            get(inspections::list_inspections).post(inspections::create_inspection),
        )
        .route(
            "/inspections/:id",
            get(inspections::get_inspection)
                .put(inspections::update_inspection)
                .delete(inspections::delete_inspection),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}
