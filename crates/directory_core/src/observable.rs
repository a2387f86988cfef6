use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Version 0 is the initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published<T> {
    pub version: u64,
    pub value: T,
}

pub struct ObservableState<T> {
    tx: watch::Sender<Published<T>>,
}

impl<T> ObservableState<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(Published {
            version: 0,
            value: initial,
        });
        Self { tx }
    }

    pub fn publish(&self, value: T) -> u64 {
        let mut assigned = 0;
        self.tx.send_modify(|current| {
            current.version += 1;
            current.value = value;
            assigned = current.version;
        });
        assigned
    }

    pub fn current(&self) -> T {
        self.tx.borrow().value.clone()
    }

    pub fn version(&self) -> u64 {
        self.tx.borrow().version
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T> std::fmt::Debug for ObservableState<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableState")
            .field("current", &*self.tx.borrow())
            .finish()
    }
}

pub struct Subscription<T> {
    rx: watch::Receiver<Published<T>>,
}

impl<T> Subscription<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn latest(&self) -> Published<T> {
        self.rx.borrow().clone()
    }

    /// Resolves on the next publish, or `None` once the state is dropped.
    pub async fn changed(&mut self) -> Option<Published<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn has_pending(&self) -> bool {
        matches!(self.rx.has_changed(), Ok(true))
    }

    /// Yields the current value first, then every later publish.
    pub fn into_stream(self) -> WatchStream<Published<T>> {
        WatchStream::new(self.rx)
    }
}
