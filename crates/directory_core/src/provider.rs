use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::{UserId, UserRecord};

/// Every call must return freshly owned records.
#[async_trait]
pub trait UserDataProvider: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>>;
}

#[derive(Debug, Clone)]
pub struct SimulatedUserRepository {
    records: Vec<UserRecord>,
}

impl SimulatedUserRepository {
    pub fn new() -> Self {
        Self::with_records(default_users())
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl Default for SimulatedUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDataProvider for SimulatedUserRepository {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.clone())
    }
}

#[derive(Debug, Clone)]
pub struct UnavailableUserDataProvider {
    reason: String,
}

impl UnavailableUserDataProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableUserDataProvider {
    fn default() -> Self {
        Self::new("user data source unavailable")
    }
}

#[async_trait]
impl UserDataProvider for UnavailableUserDataProvider {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>> {
        Err(anyhow!(self.reason.clone()))
    }
}

pub fn default_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(
            UserId(1),
            "Juan Pérez",
            "juan@gmail.com",
            22,
            "https://cdn.pixabay.com/photo/2025/10/07/10/59/parrot-9878922_1280.jpg",
        ),
        UserRecord::new(
            UserId(2),
            "Ana Torres",
            "ana@gmail.com",
            20,
            "https://cdn.pixabay.com/photo/2025/09/29/07/22/kitten-9861764_1280.jpg",
        ),
        UserRecord::new(
            UserId(3),
            "Luis Gómez",
            "luis@gmail.com",
            25,
            "https://cdn.pixabay.com/photo/2025/11/06/10/17/garden-lizard-9940372_1280.jpg",
        ),
    ]
}
