use std::time::Duration;

use shared::{domain::UserRecord, error::LoadError};

/// Simulated network latency applied before every fetch.
pub const DEFAULT_LOAD_LATENCY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub load_latency: Duration,
}

impl ControllerConfig {
    pub fn with_latency(load_latency: Duration) -> Self {
        Self { load_latency }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            load_latency: DEFAULT_LOAD_LATENCY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Empty,
    Loading,
    Loaded(Vec<UserRecord>),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    pub fn records(&self) -> &[UserRecord] {
        match self {
            Self::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}
