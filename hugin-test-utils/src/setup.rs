use std::sync::Arc;

use axum::response::Response;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Creates a fresh in-memory session for handler-level tests.
pub fn test_session() -> Session {
    let store = Arc::new(MemoryStore::default());

    Session::new(None, store, None)
}

/// Collects a response body and parses it as JSON.
pub async fn read_json(response: Response) -> Result<serde_json::Value, TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Collects a response body as a UTF-8 string.
pub async fn read_text(response: Response) -> Result<String, TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
