//! # Activity
//!
//! Fire-and-forget journaling of user actions.
//!
//! Domain code publishes an [`Activity`] on the [`ActivityFeed`]; publishing never blocks and
//! its outcome is discarded, so a missing or slow listener can never fail an operation. A
//! [`Journal`] task drains the feed in the background and writes each record to the `tracing`
//! log under the `gshop::activity` target.
//!
//! # Example
//!
//! ```rust
//! use gshop_activity::{Activity, ActivityFeed, ActivityReceiverExt};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let feed = ActivityFeed::default();
//!     let mut rx = feed.subscribe();
//!
//!     feed.publish("alice", Activity::Login { is_admin: false });
//!
//!     let record = rx.next_record().await.unwrap();
//!     assert_eq!(record.username, "alice");
//!     assert_eq!(record.activity.kind(), "login");
//! }
//! ```

mod error;
mod feed;
mod journal;
mod receiver;
mod record;

pub use error::{ActivityError, ActivityErrorExt};
pub use feed::{ActivityFeed, DEFAULT_CAPACITY};
pub use journal::{JOURNAL_TARGET, Journal};
pub use receiver::ActivityReceiverExt;
pub use record::{Activity, ActivityRecord};
