use crate::error::ActivityError;
use crate::record::{Activity, ActivityRecord};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

/// Default buffer; a CLI session never gets close to it.
pub const DEFAULT_CAPACITY: usize = 128;
const MIN_CAPACITY: usize = 1;

/// In-process fan-out of [`ActivityRecord`]s.
///
/// Publishing never blocks and never fails: records sent while nobody listens are dropped.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    sender: broadcast::Sender<Arc<ActivityRecord>>,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self { sender: broadcast::channel(DEFAULT_CAPACITY).0 }
    }
}

impl ActivityFeed {
    /// # Errors
    /// Returns [`ActivityError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ActivityError> {
        if capacity < MIN_CAPACITY {
            return Err(ActivityError::InvalidCapacity {
                message: format!("capacity must be >= {MIN_CAPACITY}").into(),
                context: None,
            });
        }
        Ok(Self { sender: broadcast::channel(capacity).0 })
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ActivityRecord>> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Stamps and broadcasts a record, discarding the outcome.
    pub fn publish(&self, username: impl Into<String>, activity: Activity) {
        let record = ActivityRecord::new(username, activity);
        if self.sender.send(Arc::new(record)).is_err() {
            trace!("Activity dropped: no subscribers");
        }
    }
}
