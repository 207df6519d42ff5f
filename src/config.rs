use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::infrastructure::{LatencyProfile, NODE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub latency: LatencyConfig,
    pub viewer: ViewerConfig,
    pub ids: IdConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatencyConfig {
    /// Per-operation delays of the browser mock
    Realistic,
    Off,
    Uniform(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdConfig {
    pub node_id: u16,
}

impl LatencyConfig {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "default" | "realistic" => Ok(LatencyConfig::Realistic),
            "off" | "none" | "0" => Ok(LatencyConfig::Off),
            millis => millis
                .parse::<u64>()
                .map(|ms| LatencyConfig::Uniform(Duration::from_millis(ms)))
                .map_err(|_| {
                    AppError::Configuration(format!(
                        "MOCK_LATENCY must be 'default', 'off' or a number of milliseconds, got '{}'",
                        value
                    ))
                }),
        }
    }

    pub fn profile(&self) -> LatencyProfile {
        match self {
            LatencyConfig::Realistic => LatencyProfile::realistic(),
            LatencyConfig::Off => LatencyProfile::zero(),
            LatencyConfig::Uniform(delay) => LatencyProfile::uniform(*delay),
        }
    }
}

impl IdConfig {
    /// Node id for the post id generator, `0..1024`
    pub fn parse(value: &str) -> AppResult<Self> {
        let node_id = value
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|node| *node < NODE_LIMIT)
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "ID_NODE must be an integer between 0 and {}, got '{}'",
                    NODE_LIMIT - 1,
                    value
                ))
            })?;
        Ok(IdConfig { node_id })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::Realistic,
            viewer: ViewerConfig {
                user_id: "1".to_string(),
            },
            ids: IdConfig { node_id: 0 },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let latency = match env::var("MOCK_LATENCY") {
            Ok(value) => LatencyConfig::parse(&value)?,
            Err(_) => defaults.latency,
        };

        let user_id = env::var("VIEWER_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(defaults.viewer.user_id);

        let ids = match env::var("ID_NODE") {
            Ok(value) => IdConfig::parse(&value)?,
            Err(_) => defaults.ids,
        };

        Ok(Self {
            latency,
            viewer: ViewerConfig { user_id },
            ids,
        })
    }

    /// Defaults with latency switched off
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyConfig::Off,
            ..Self::default()
        }
    }
}
