use std::sync::Arc;

use crate::auth::gate::AdminGate;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trainer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin credential check, read-only after startup.
    pub gate: Arc<AdminGate>,
}
