use crate::feed::ActivityFeed;
use crate::receiver::ActivityReceiverExt;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Log target of journaled activity records.
pub const JOURNAL_TARGET: &str = "gshop::activity";

/// Detached task that writes every activity record to the structured log.
#[derive(Debug)]
pub struct Journal {
    task: JoinHandle<u64>,
}

impl Journal {
    /// Subscribes to `feed` and starts draining it on the current tokio runtime.
    ///
    /// Records published before this call are not seen.
    #[must_use]
    pub fn spawn(feed: &ActivityFeed) -> Self {
        let mut rx = feed.subscribe();

        let task = tokio::spawn(async move {
            let mut written = 0u64;
            while let Some(record) = rx.next_record().await {
                let details = serde_json::to_string(&record.activity).unwrap_or_default();
                info!(
                    target: JOURNAL_TARGET,
                    kind = record.activity.kind(),
                    username = %record.username,
                    timestamp = %record.timestamp.to_rfc3339(),
                    %details,
                    "Activity"
                );
                written += 1;
            }
            written
        });

        Self { task }
    }

    /// Waits until every feed handle is dropped and the backlog is written.
    ///
    /// Returns how many records were journaled.
    pub async fn finish(self) -> u64 {
        match self.task.await {
            Ok(written) => written,
            Err(err) => {
                warn!(error = %err, "Activity journal task failed");
                0
            },
        }
    }
}
