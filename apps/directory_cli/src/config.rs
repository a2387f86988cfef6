use std::{fs, io, path::Path, time::Duration};

use anyhow::Context;
use directory_core::{ControllerConfig, DEFAULT_LOAD_LATENCY};
use serde::Deserialize;

pub const DEFAULT_SPINNER_TICK_MS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub load_latency_ms: u64,
    pub spinner_tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            load_latency_ms: DEFAULT_LOAD_LATENCY.as_millis() as u64,
            spinner_tick_ms: DEFAULT_SPINNER_TICK_MS,
        }
    }
}

impl Settings {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::with_latency(Duration::from_millis(self.load_latency_ms))
    }

    pub fn spinner_tick(&self) -> Duration {
        Duration::from_millis(self.spinner_tick_ms.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    load_latency_ms: Option<u64>,
    spinner_tick_ms: Option<u64>,
}

/// Defaults, then the optional TOML file, then the environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };

    let file_cfg = parse_file_settings(&raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;
    if let Some(v) = file_cfg.load_latency_ms {
        settings.load_latency_ms = v;
    }
    if let Some(v) = file_cfg.spinner_tick_ms {
        settings.spinner_tick_ms = v;
    }
    Ok(())
}

fn parse_file_settings(raw: &str) -> Result<FileSettings, toml::de::Error> {
    toml::from_str(raw)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["DIRECTORY_LOAD_LATENCY_MS", "APP__LOAD_LATENCY_MS"] {
        if let Some(parsed) = lookup(key).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.load_latency_ms = parsed;
        }
    }

    if let Some(parsed) = lookup("APP__SPINNER_TICK_MS").and_then(|v| v.trim().parse::<u64>().ok())
    {
        settings.spinner_tick_ms = parsed;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
