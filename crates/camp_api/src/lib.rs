//! HTTP surface for the camp records service.
//!
//! # Responsibility
//! - Map routes to camper/activity/signup use-cases in `camp_core`.
//! - Shape JSON responses and translate failures into client errors.
//!
//! # Invariants
//! - Handlers hold the storage lock only for synchronous work, never
//!   across an `.await`.
//! - The storage handle is created by the caller and shared through
//!   `AppState`; it closes when the last clone is dropped.

use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use log::info;
use rusqlite::Connection;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub mod dto;
pub mod error;
pub mod handlers;
mod request_log;

use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection (see `camp_core::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    pub(crate) fn with_conn<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let conn = self
            .db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))?;
        op(&conn)
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/campers",
            get(handlers::list_campers).post(handlers::create_camper),
        )
        .route(
            "/campers/:id",
            get(handlers::get_camper).patch(handlers::update_camper),
        )
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:id", delete(handlers::delete_activity))
        .route("/signups", post(handlers::create_signup))
        .with_state(state)
        .layer(middleware::from_fn(request_log::log_requests))
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("event=server_start module=api status=ok addr={addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=api status=ok addr={addr}");
    Ok(())
}
