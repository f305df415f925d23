use sha2::{Digest, Sha512};
use tera::Tera;
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer, SessionStore,
};
use tower_sessions_redis_store::{
    fred::interfaces::ClientLike,
    fred::prelude::{Config as ValkeyConfig, Pool},
    RedisStore,
};

use crate::{config::Config, error::Error};

/// Load the page templates from the configured site root
pub fn build_templates(config: &Config) -> Result<Tera, Error> {
    let templates = Tera::new(&config.templates_glob())?;

    Ok(templates)
}

/// Derive the cookie signing key from the configured session secret
///
/// The secret can be any length; a SHA-512 digest stretches it to the 64
/// bytes the cookie key requires, deterministically, so restarts keep
/// existing cookies valid.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());

    Key::from(digest.as_slice())
}

/// Configure session management over the given store
///
/// Sessions live in a signed cookie pointing at a store-backed record:
/// 90-day expiry, HTTP-only, `secure` only in production, and persisted only
/// once a handler actually writes to the session.
pub fn session_layer<Store>(
    store: Store,
    config: &Config,
) -> SessionManagerLayer<Store, SignedCookie>
where
    Store: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_secure(config.is_production())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(90)))
        .with_signed(signing_key(&config.session_secret))
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>, SignedCookie>, Error> {
    let valkey_config = ValkeyConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(valkey_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    Ok(session_layer(session_store, config))
}
