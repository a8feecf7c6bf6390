// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;
use visitpass_core::{APP_NAME, Config as CoreConfig, Identity};

const VISITPASS_CONFIG_ENV: &str = "VISITPASS_CONFIG";
const VISITPASS_DEV_ENV: &str = "VISITPASS_DEV";

const VISITPASS_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const VISITPASS_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from `--config`, then `VISITPASS_CONFIG`, then the user config dir.
///
/// A missing file at the default location yields the defaults. A path given explicitly must be
/// readable.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(VISITPASS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({VISITPASS_DEV_ENV} is set): config must be explicitly specified via --config or {VISITPASS_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, Config { session: a.session }))
}

/// Configuration of the command-line host.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// The employee acting at the desk, used for pre-approvals.
    pub session: Option<Identity>,
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    session: Option<Identity>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(VISITPASS_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if VISITPASS_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if VISITPASS_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            VISITPASS_DEV_ENV,
            val,
            VISITPASS_DEV_VALID_TRUE.join(", "),
            VISITPASS_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
