use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the service keeps no other in-memory state across
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Connection provider; handlers check out one connection per request.
    pub db: bookstore_db::Db,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
