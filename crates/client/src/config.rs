use eyre::{eyre, Result, WrapErr};
use sihra_core::schedule::{
    GridConfig,
    grid::{DEFAULT_MIN_VISIBLE_HEIGHT_PX, DEFAULT_ROW_HEIGHT_PX},
};
use std::env;
use std::time::Duration;

/// Configuration for talking to the SIHRA API.
///
/// The bearer credential is deliberately not part of this struct; callers
/// hand it to [`crate::SihraApi`] per session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the SIHRA REST API (required)
    pub base_url: String,
    /// Timeout applied to every upstream request (defaults to 15s)
    pub request_timeout: Duration,
    /// Layout of the weekly grid
    pub grid: GridConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SIHRA_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| eyre!("SIHRA_API_BASE_URL environment variable not set"))?;

        let request_timeout = lookup("SIHRA_HTTP_TIMEOUT_SECONDS")
            .map(|secs| secs.parse::<u64>())
            .transpose()
            .wrap_err("SIHRA_HTTP_TIMEOUT_SECONDS must be a whole number of seconds")?
            .unwrap_or(15);

        let row_height_px = parse_px(&lookup, "GRID_ROW_HEIGHT_PX", DEFAULT_ROW_HEIGHT_PX)?;
        let min_visible_height_px = parse_px(
            &lookup,
            "GRID_MIN_VISIBLE_HEIGHT_PX",
            DEFAULT_MIN_VISIBLE_HEIGHT_PX,
        )?;
        let grid = GridConfig::new(row_height_px, min_visible_height_px)?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(request_timeout),
            grid,
        })
    }
}

fn parse_px<F>(lookup: &F, key: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<f64>()
            .wrap_err_with(|| format!("{} must be a number of pixels", key)),
        None => Ok(default),
    }
}
