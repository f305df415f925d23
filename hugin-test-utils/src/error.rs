use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Body(#[from] axum::Error),
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
