//! A small sandboxed key-value store.
//!
//! Values are opaque byte blobs addressed by a validated [`StorageKey`], optionally grouped
//! under a namespace. All examples use temporary directories to avoid writing to the real
//! filesystem.
//!
//! # Core Features
//!
//! - **Sandboxed keys**: Keys are flat file names, so nothing can escape the storage root.
//! - **Atomic Writes**: Unique temp write + `fsync` + `rename`, so a crash never leaves a torn value.
//! - **Transparent Compression**: Optional LZ4 block compression, invisible to the consumer.
//! - **Two backends**: A disk root for real use, a hash map for tests and throwaway sessions.
//! - **Self-Healing**: Orphaned temporary files are removed when a disk root is opened.
//!
//! # Examples
//!
//! ```rust
//! use gshop_storage::{Storage, StorageError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), StorageError> {
//!     let storage = Storage::builder().in_memory().connect().await?;
//!     let shop = storage.namespace("gameshop")?;
//!
//!     assert_eq!(shop.get("cart.json").await?, None);
//!     shop.write("cart.json", b"[]").await?;
//!     assert!(shop.exists("cart.json")?);
//!     assert!(shop.delete("cart.json").await?);
//!
//!     Ok(())
//! }
//! ```

mod backend;
mod builder;
mod engine;
mod error;
mod key;
mod maintenance;
mod namespace;

pub use builder::{InMemory, NoBackend, StorageBuilder, WithRoot};
pub use engine::{Compression, Storage};
pub use error::{StorageError, StorageErrorExt};
pub use key::StorageKey;
pub use namespace::{NamespaceName, NamespacedStorage};
