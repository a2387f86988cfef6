use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

use shared::{domain::UserRecord, error::LoadError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub mod observable;
pub mod provider;
pub mod types;
mod validation;

pub use observable::{ObservableState, Published, Subscription};
pub use provider::{
    default_users, SimulatedUserRepository, UnavailableUserDataProvider, UserDataProvider,
};
pub use types::{ControllerConfig, LoadState, DEFAULT_LOAD_LATENCY};
pub use validation::{validate_batch, BatchError};

pub struct ListController {
    provider: Arc<dyn UserDataProvider>,
    config: ControllerConfig,
    records: Arc<ObservableState<Vec<UserRecord>>>,
    status: Arc<ObservableState<LoadState>>,
    // `true` once the controller is dropped. Held across each records+status
    // publish pair so both cells always describe the same batch.
    publish_gate: Arc<Mutex<bool>>,
    loads: Mutex<Vec<JoinHandle<()>>>,
    next_load_id: AtomicU64,
}

struct LoadJob {
    load_id: u64,
    latency: Duration,
    provider: Arc<dyn UserDataProvider>,
    records: Arc<ObservableState<Vec<UserRecord>>>,
    status: Arc<ObservableState<LoadState>>,
    publish_gate: Arc<Mutex<bool>>,
}

impl ListController {
    /// Must be called from within a Tokio runtime.
    pub fn new(provider: Arc<dyn UserDataProvider>, config: ControllerConfig) -> Self {
        let controller = Self {
            provider,
            config,
            records: Arc::new(ObservableState::new(Vec::new())),
            status: Arc::new(ObservableState::new(LoadState::Empty)),
            publish_gate: Arc::new(Mutex::new(false)),
            loads: Mutex::new(Vec::new()),
            next_load_id: AtomicU64::new(0),
        };
        controller.load();
        controller
    }

    pub fn records(&self) -> &ObservableState<Vec<UserRecord>> {
        &self.records
    }

    pub fn status(&self) -> &ObservableState<LoadState> {
        &self.status
    }

    pub fn subscribe_records(&self) -> Subscription<Vec<UserRecord>> {
        self.records.subscribe()
    }

    pub fn subscribe_status(&self) -> Subscription<LoadState> {
        self.status.subscribe()
    }

    pub fn load(&self) {
        let load_id = self.next_load_id.fetch_add(1, Ordering::Relaxed) + 1;
        {
            let _gate = self
                .publish_gate
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.status.publish(LoadState::Loading);
        }
        info!(
            load_id,
            latency_ms = self.config.load_latency.as_millis() as u64,
            "user load started"
        );

        let task = tokio::spawn(run_load(LoadJob {
            load_id,
            latency: self.config.load_latency,
            provider: Arc::clone(&self.provider),
            records: Arc::clone(&self.records),
            status: Arc::clone(&self.status),
            publish_gate: Arc::clone(&self.publish_gate),
        }));

        let mut loads = self.loads.lock().unwrap_or_else(PoisonError::into_inner);
        loads.retain(|handle| !handle.is_finished());
        loads.push(task);
    }

    pub fn in_flight_loads(&self) -> usize {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for ListController {
    fn drop(&mut self) {
        *self
            .publish_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = true;

        let loads = self
            .loads
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for handle in loads.drain(..) {
            if !handle.is_finished() {
                debug!(reason = %LoadError::cancelled(), "aborting in-flight user load");
            }
            handle.abort();
        }
    }
}

async fn run_load(job: LoadJob) {
    tokio::time::sleep(job.latency).await;

    let outcome = match job.provider.fetch_all().await {
        Ok(records) => validate_batch(&records)
            .map(|()| records)
            .map_err(LoadError::from),
        Err(err) => Err(LoadError::fetch_failed(format!("{err:#}"))),
    };
    publish_outcome(&job, outcome);
}

fn publish_outcome(job: &LoadJob, outcome: Result<Vec<UserRecord>, LoadError>) {
    let closed = job
        .publish_gate
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if *closed {
        debug!(
            load_id = job.load_id,
            reason = %LoadError::cancelled(),
            "controller dropped; discarding user load"
        );
        return;
    }

    match outcome {
        Ok(records) => {
            let count = records.len();
            let version = job.records.publish(records.clone());
            job.status.publish(LoadState::Loaded(records));
            info!(load_id = job.load_id, count, version, "published user records");
        }
        Err(err) => {
            warn!(load_id = job.load_id, error = %err, "user load failed");
            job.status.publish(LoadState::Failed(err));
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/observable_tests.rs"]
mod observable_tests;

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod provider_tests;
