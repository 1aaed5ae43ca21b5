use std::fmt;
use std::net::SocketAddr;

use crate::Error;
use crate::turn::DEFAULT_TURN_TTL_SECS;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_TURN_IDENTITY: &str = "webuser";

/// Everything the credential issuer needs, loaded once at startup.
#[derive(Clone)]
pub struct TurnSettings {
    pub secret: String,
    pub urls: Vec<String>,
    pub ttl_secs: i64,
    pub identity: String,
}

// The secret is a long-term trust root; keep it out of debug output.
impl fmt::Debug for TurnSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnSettings")
            .field("secret", &"<redacted>")
            .field("urls", &self.urls)
            .field("ttl_secs", &self.ttl_secs)
            .field("identity", &self.identity)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub turn: TurnSettings,
}

impl Config {
    /// Load and validate the full configuration from the environment (and an
    /// optional `.env` file). Any missing or malformed value is a fatal
    /// `Error::Config`; the caller must refuse to serve traffic on failure.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let database_url = require("DATABASE_URL")?;
        let secret = require("TURN_SECRET")?;
        let turn_url = validate_turn_url(&require("TURN_URL")?)?;
        let ttl_secs = parse_ttl(std::env::var("TURN_TTL_SECS").ok())?;
        let identity = std::env::var("TURN_IDENTITY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TURN_IDENTITY.to_string());
        let allowed_origins = parse_origins(std::env::var("ALLOWED_ORIGINS").ok());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        Ok(Config {
            database_url,
            bind_addr,
            allowed_origins,
            turn: TurnSettings {
                secret,
                urls: vec![turn_url],
                ttl_secs,
                identity,
            },
        })
    }
}

fn require(name: &str) -> Result<String, Error> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set and non-empty", name))),
    }
}

fn validate_turn_url(url: &str) -> Result<String, Error> {
    if url.starts_with("turn:") || url.starts_with("turns:") {
        Ok(url.to_string())
    } else {
        Err(Error::Config(format!(
            "TURN_URL must use the turn: or turns: scheme, got {:?}",
            url
        )))
    }
}

fn parse_ttl(raw: Option<String>) -> Result<i64, Error> {
    match raw {
        None => Ok(DEFAULT_TURN_TTL_SECS),
        Some(value) => match value.parse::<i64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(Error::Config(format!(
                "TURN_TTL_SECS must be a positive integer, got {:?}",
                value
            ))),
        },
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
