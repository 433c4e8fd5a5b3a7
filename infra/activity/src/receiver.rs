use crate::record::ActivityRecord;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Lag-tolerant receive for activity subscribers.
pub trait ActivityReceiverExt {
    /// Receive the next record, returning `None` once every publisher is gone.
    ///
    /// A subscriber that fell behind skips to the oldest record still buffered.
    fn next_record(&mut self) -> impl Future<Output = Option<Arc<ActivityRecord>>> + Send;
}

impl ActivityReceiverExt for broadcast::Receiver<Arc<ActivityRecord>> {
    async fn next_record(&mut self) -> Option<Arc<ActivityRecord>> {
        let mut skipped = 0u64;

        loop {
            match self.recv().await {
                Ok(record) => {
                    if skipped > 0 {
                        warn!(skipped, "Activity subscriber lagged; continuing from oldest buffered record");
                    }
                    return Some(record);
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(skipped = n, total_skipped = skipped, "Activity subscriber lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
