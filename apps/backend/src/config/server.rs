use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::middleware::cors::parse_origins;
use crate::services::room_flow::RoomSettings;

/// Everything `main` needs to bind and run the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub room: RoomSettings,
    /// Fixed deal seed; `None` draws from OS entropy.
    pub deal_seed: Option<u64>,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            room: RoomSettings::default(),
            deal_seed: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Unset or blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let host = get("BACKEND_HOST").unwrap_or(defaults.host);
        let port = match get("BACKEND_PORT").or_else(|| get("PORT")) {
            Some(raw) => parse_var("BACKEND_PORT", &raw)?,
            None => defaults.port,
        };

        let room = RoomSettings {
            trick_clear_delay: millis_var(
                &get,
                "BRIDGE_TRICK_CLEAR_DELAY_MS",
                defaults.room.trick_clear_delay,
            )?,
            deal_end_delay: millis_var(
                &get,
                "BRIDGE_DEAL_END_DELAY_MS",
                defaults.room.deal_end_delay,
            )?,
            auction_reset_delay: millis_var(
                &get,
                "BRIDGE_AUCTION_RESET_DELAY_MS",
                defaults.room.auction_reset_delay,
            )?,
            restart_notify_all: match get("BRIDGE_RESTART_NOTIFY_ALL") {
                Some(raw) => parse_bool("BRIDGE_RESTART_NOTIFY_ALL", &raw)?,
                None => defaults.room.restart_notify_all,
            },
        };

        let deal_seed = get("BRIDGE_DEAL_SEED")
            .map(|raw| parse_var("BRIDGE_DEAL_SEED", &raw))
            .transpose()?;

        let cors_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            room,
            deal_seed,
            cors_origins,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'")))
}

fn millis_var<G>(get: &G, name: &str, default: Duration) -> Result<Duration, AppError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(raw) => parse_var::<u64>(name, &raw).map(Duration::from_millis),
        None => Ok(default),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}
