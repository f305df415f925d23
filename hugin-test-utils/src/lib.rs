//! Shared fixtures and helpers for hugin's tests.
//!
//! This crate deliberately does not depend on `hugin`; it provides the raw
//! pieces (a site directory on disk, an in-memory session, response body
//! helpers) from which the integration tests assemble application state.

pub mod constant;
pub mod error;
pub mod fixture;
pub mod setup;

pub use error::TestError;
pub use fixture::SiteFixture;

pub mod prelude {
    pub use crate::{constant::*, fixture::SiteFixture, setup, TestError};
}
