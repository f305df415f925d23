use std::{path::PathBuf, str::FromStr};

use serde::Serialize;

use crate::error::config::ConfigError;

/// Runtime mode the application was started in.
///
/// Production enables the canonical HTTPS redirect, HSTS, cache-busting asset
/// hashes, secure session cookies, and the daily share job. Development disables
/// all of them so local iteration never fights a cache or a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local iteration: no redirects, no HSTS, unhashed assets, plain cookies.
    Development,
    /// Deployed behind TLS termination on the canonical host.
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(format!("unknown environment {:?}", other)),
        }
    }
}

/// Application configuration, constructed once at startup and shared by
/// reference with the request pipeline and the job trigger.
///
/// Serialized into every template render as the `config` local; fields that
/// carry credentials or internal endpoints are excluded from serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Runtime mode, from `HUGIN_ENV`.
    pub environment: Environment,
    /// Canonical host the site is served from, e.g. `hugin.example.org`.
    pub canonical_host: String,
    /// Canonical HTTPS origin redirected to in production, e.g. `https://hugin.example.org`.
    pub http_origin: String,
    /// Filesystem root containing `static/`, `vendor/`, and `templates/`.
    pub root: PathBuf,
    /// Cache lifetime in seconds for static asset responses.
    pub static_max_age: u64,
    /// Address the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Valkey/Redis connection URL backing the session store.
    #[serde(skip_serializing)]
    pub valkey_url: String,
    /// Secret the session cookie signing key is derived from.
    #[serde(skip_serializing)]
    pub session_secret: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: parse_or("HUGIN_ENV", optional("HUGIN_ENV"), Environment::Development)?,
            canonical_host: required("CANONICAL_HOST")?,
            http_origin: required("HTTP_ORIGIN")?,
            root: PathBuf::from(optional("SITE_ROOT").unwrap_or_else(|| ".".to_string())),
            static_max_age: parse_or("STATIC_MAX_AGE", optional("STATIC_MAX_AGE"), 86_400)?,
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", optional("PORT"), 8080)?,
            valkey_url: required("VALKEY_URL")?,
            session_secret: required("SESSION_SECRET")?,
        })
    }

    /// Whether the application runs in production mode.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Application static asset directory, served first.
    pub fn static_dir(&self) -> PathBuf {
        self.root.join("static")
    }

    /// CSS-framework asset directory, served when the static directory misses.
    pub fn vendor_dir(&self) -> PathBuf {
        self.root.join("vendor")
    }

    /// Glob passed to the template engine at startup.
    pub fn templates_glob(&self) -> String {
        format!("{}/templates/**/*.html", self.root.display())
    }

    /// Script bundle tracked by the cache-busting hasher.
    pub fn bundle_path(&self) -> PathBuf {
        self.static_dir().join("bundle.js")
    }

    /// Stylesheet tracked by the cache-busting hasher.
    pub fn style_path(&self) -> PathBuf {
        self.static_dir().join("style.css")
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn parse_or<T: FromStr>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    <T as FromStr>::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.parse().map_err(|err: <T as FromStr>::Err| {
            ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: err.to_string(),
            }
        }),
        None => Ok(default),
    }
}
