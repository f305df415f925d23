//! Cache-busting asset hashes.
//!
//! Each tracked static asset gets a short content hash appended to its URL as a
//! query suffix, so a deploy that changes the file also changes every reference
//! to it and stale CDN/browser caches are skipped. Hashes are computed once at
//! startup in production; in development the suffixes stay empty so local edits
//! are always served fresh.

use std::fs;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

use crate::{config::Config, error::Error};

/// Length of the encoded hash token appended to asset URLs.
pub const ASSET_HASH_LEN: usize = 20;

/// Computes the cache-busting token for a file's bytes.
///
/// SHA-256, base64 URL-safe without padding, truncated to [`ASSET_HASH_LEN`]
/// characters. Deterministic for identical bytes; never contains `+`, `/`,
/// or `=`.
pub fn asset_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut encoded = URL_SAFE_NO_PAD.encode(digest);
    encoded.truncate(ASSET_HASH_LEN);

    encoded
}

/// Query suffixes for the two tracked assets, ready to append to their URLs.
///
/// In production each holds `?<token>`; in development both are empty strings.
/// Computed before the listener binds and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetHashes {
    /// Suffix for the script bundle URL.
    pub bundle: String,
    /// Suffix for the stylesheet URL.
    pub style: String,
}

impl AssetHashes {
    /// Reads the tracked assets and computes their query suffixes.
    ///
    /// A read failure in production is returned to the caller and aborts
    /// startup. In development no file is read.
    pub fn load(config: &Config) -> Result<Self, Error> {
        if !config.is_production() {
            return Ok(Self::default());
        }

        let bundle = fs::read(config.bundle_path())?;
        let style = fs::read(config.style_path())?;

        Ok(Self {
            bundle: format!("?{}", asset_hash(&bundle)),
            style: format!("?{}", asset_hash(&style)),
        })
    }
}
