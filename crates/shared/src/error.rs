use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorCode {
    FetchFailed,
    InvalidData,
    Cancelled,
}

impl LoadErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchFailed => "fetch_failed",
            Self::InvalidData => "invalid_data",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {message}", code.as_str())]
pub struct LoadError {
    pub code: LoadErrorCode,
    pub message: String,
}

impl LoadError {
    pub fn new(code: LoadErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::new(LoadErrorCode::FetchFailed, message)
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(LoadErrorCode::InvalidData, message)
    }

    pub fn cancelled() -> Self {
        Self::new(LoadErrorCode::Cancelled, "load abandoned before completion")
    }
}
