//! Share-to-social client contract.
//!
//! The daily scheduled job posts the site to a social platform through this
//! contract. The posting implementation lives outside the server; the trigger
//! only needs a zero-argument action whose outcome it can log and drop.

use futures::future::BoxFuture;
use thiserror::Error;

/// Error reported by a share client.
#[derive(Error, Debug)]
pub enum ShareError {
    /// The platform rejected or failed the post.
    #[error("share request failed: {0}")]
    Platform(String),
}

/// The call contract between the scheduled job trigger and the share client.
pub trait ShareClient: Send + Sync {
    /// Posts the site to the platform. Fire-and-forget from the trigger's
    /// perspective: no retry, no backoff.
    fn share(&self) -> BoxFuture<'static, Result<(), ShareError>>;
}

/// Share client used when no platform credentials are configured.
pub struct NoopShareClient;

impl ShareClient for NoopShareClient {
    fn share(&self) -> BoxFuture<'static, Result<(), ShareError>> {
        Box::pin(async {
            tracing::debug!("No share client configured, skipping daily share");

            Ok(())
        })
    }
}
