use std::collections::HashSet;

use shared::{
    domain::{UserId, UserRecord},
    error::LoadError,
};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("duplicate user id {0} in provider response")]
    DuplicateId(UserId),
    #[error("user {id} has an invalid image url '{url}': {reason}")]
    InvalidImageUrl {
        id: UserId,
        url: String,
        reason: String,
    },
}

impl From<BatchError> for LoadError {
    fn from(value: BatchError) -> Self {
        LoadError::invalid_data(value.to_string())
    }
}

pub fn validate_batch(records: &[UserRecord]) -> Result<(), BatchError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(BatchError::DuplicateId(record.id()));
        }
        if let Err(err) = Url::parse(record.image_url()) {
            return Err(BatchError::InvalidImageUrl {
                id: record.id(),
                url: record.image_url().to_string(),
                reason: err.to_string(),
            });
        }
    }
    Ok(())
}
