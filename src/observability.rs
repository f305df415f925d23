//! Tracing setup and the server-failure observability hook.

use axum::http::StatusCode;

/// Initialize the tracing subscriber.
///
/// Log level is controlled with the `RUST_LOG` environment variable and
/// defaults to `info,hugin=debug` when unset.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hugin=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Hook invoked for every server-side failure the pipeline produces.
///
/// Always present in the pipeline configuration; installations without an
/// error-reporting backend use [`NoopObservability`]. This replaces inspecting
/// ambient global state to decide whether an error reporter is attached.
pub trait ObservabilityHook: Send + Sync {
    /// Called after a response with a 5xx status has been produced.
    fn capture_failure(&self, status: StatusCode, path: &str);
}

/// Observability hook that reports nowhere.
pub struct NoopObservability;

impl ObservabilityHook for NoopObservability {
    fn capture_failure(&self, _status: StatusCode, _path: &str) {}
}
