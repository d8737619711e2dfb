use crate::composer::StyleRegistry;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide style catalogue and render matrix.
    pub registry: &'static StyleRegistry,
}
