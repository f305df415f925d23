use std::sync::Arc;

use tera::Tera;

use crate::{
    config::Config, hash::AssetHashes, observability::ObservabilityHook, service::api::ApiModule,
};

/// Shared application state handed to every route handler.
///
/// Everything here is constructed once at startup and immutable afterwards;
/// cloning the state clones handles, not data.
#[derive(Clone)]
pub struct AppState {
    /// Environment-derived configuration.
    pub config: Arc<Config>,
    /// Loaded page templates.
    pub templates: Arc<Tera>,
    /// Cache-busting query suffixes for the tracked assets.
    pub assets: AssetHashes,
    /// Installed API module, dispatched by `/api/{method}` and `/docs`.
    pub api: Arc<dyn ApiModule>,
    /// Hook receiving server-side failures.
    pub observability: Arc<dyn ObservabilityHook>,
}
