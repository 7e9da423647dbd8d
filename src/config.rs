use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::{AppError, Result};

pub const DEFAULT_RECIPE_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Runtime configuration, built once at startup and handed to the clients.
///
/// The Spoonacular key is the only hard requirement: without it no search can
/// be attempted, so its absence fails `load` instead of surfacing later as a
/// rejected request.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub recipe_base_url: String,
    pub backend_base_url: String,
    pub result_cap: u32,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_key = env::var("SPOONACULAR_API_KEY").map_err(|_| AppError::MissingApiKey)?;

        Ok(Self {
            api_key,
            recipe_base_url: try_load("SPOONACULAR_BASE_URL", DEFAULT_RECIPE_BASE_URL)?,
            backend_base_url: try_load("BACKEND_BASE_URL", "http://localhost:3001")?,
            result_cap: try_load("RECIPE_RESULT_CAP", "6")?,
            timeout_secs: try_load("HTTP_TIMEOUT_SECS", "30")?,
        })
    }
}

fn var(key: &str) -> std::result::Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            AppError::InvalidConfig(key)
        })
}
