//! Configuration loading and parsing.
//!
//! Precedence, lowest first:
//! 1. Default values
//! 2. Configuration file (TOML)
//! 3. Environment variables (`QUICD_PACKET_` prefix)

use anyhow::{Context, Result};
use config::Config as ConfigLoader;
use std::path::Path;

use super::DecoderConfig;

/// Environment variable prefix for overrides, e.g. `QUICD_PACKET_SHORT_DCID_LEN=8`.
pub const ENV_PREFIX: &str = "QUICD_PACKET";

/// Load and validate decoder configuration.
///
/// A missing file is not an error: defaults are used and a warning is logged.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read or parsed
/// - An environment override is not a non-negative integer
/// - Validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<DecoderConfig> {
    load_config_with_env_prefix(path, ENV_PREFIX)
}

/// [`load_config`] with a custom environment variable prefix.
pub fn load_config_with_env_prefix(
    path: impl AsRef<Path>,
    env_prefix: &str,
) -> Result<DecoderConfig> {
    let mut config = load_config_file(path.as_ref())?;

    apply_env_overrides(&mut config, env_prefix)?;

    config.validate().map_err(|errors| {
        anyhow::anyhow!("Configuration validation failed:\n{}", errors.join("\n"))
    })?;

    // Warnings only; the decoder accepts these values
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::debug!(
        short_dcid_len = config.short_dcid_len,
        "Decoder configuration loaded"
    );

    Ok(config)
}

/// Load configuration from a TOML file.
fn load_config_file(path: &Path) -> Result<DecoderConfig> {
    // If file doesn't exist, use default config
    if !path.exists() {
        tracing::warn!(
            config_path = %path.display(),
            "Configuration file not found, using defaults"
        );
        return Ok(DecoderConfig::default());
    }

    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
}

/// Apply environment variable overrides.
///
/// Variables use the prefix followed by `_` and the upper-cased field name.
fn apply_env_overrides(config: &mut DecoderConfig, env_prefix: &str) -> Result<()> {
    let env_config = ConfigLoader::builder()
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to load environment variables")?;

    match env_config.get_int("short_dcid_len") {
        Ok(len) => {
            config.short_dcid_len = usize::try_from(len).with_context(|| {
                format!("{}_SHORT_DCID_LEN must be non-negative, got {}", env_prefix, len)
            })?;
        }
        Err(config::ConfigError::NotFound(_)) => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Invalid {}_SHORT_DCID_LEN", env_prefix));
        }
    }

    Ok(())
}
