use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    /// Access-token lifetime in seconds.
    pub access_token_ttl: i64,
    /// Refresh-token lifetime in seconds; also bounds the reuse blacklist.
    pub refresh_token_ttl: i64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("HONEY_PORT", "8080"),
            jwt_secret: load_secret("HONEY_JWT_SECRET"),
            access_token_ttl: try_load("HONEY_ACCESS_TTL", "900"),
            refresh_token_ttl: try_load("HONEY_REFRESH_TTL", "604800"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_secret(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set, falling back to a development-only secret");
        "honey-dev-secret".to_string()
    })
}
