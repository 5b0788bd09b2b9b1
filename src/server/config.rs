use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite://cms.db?mode=rwc";

pub struct Config {
    pub port: u16,
    pub database_url: String,

    /// Normalized origins (`scheme://host[:port]`) accepted by the CORS guard.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", &value, e.to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            allowed_origins: parse_allowed_origins(&frontend_url)?,
        })
    }
}

/// Parses a comma-separated origin list.
///
/// Entries are trimmed, trailing slashes are dropped and each entry is reduced to its
/// origin, so `https://example.com/` and `https://example.com` are the same entry.
pub fn parse_allowed_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut origins: Vec<String> = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let entry = entry.trim_end_matches('/');
        let url =
            Url::parse(entry).map_err(|e| ConfigError::invalid("FRONTEND_URL", entry, e.to_string()))?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(ConfigError::invalid(
                "FRONTEND_URL",
                entry,
                "not an http(s) origin",
            ));
        }

        let origin = origin.ascii_serialization();
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }

    if origins.is_empty() {
        return Err(ConfigError::invalid("FRONTEND_URL", raw, "no origins given"));
    }

    Ok(origins)
}
