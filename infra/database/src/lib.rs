//! # Persistence
//!
//! Loads and saves the whole [`ShopState`] as one JSON document per collection ("slot") in a
//! [`gshop_storage`] namespace, and bootstraps an empty store with an admin and sample data.
//!
//! ## Key Features
//! - **Engine Agnostic**: `file://<dir>` for a durable store, `mem://` for tests and dry runs.
//! - **Forgiving load**: absent slots fall back to empty collections; a slot holding garbage is
//!   a hard [`DatabaseError::Corrupted`].
//! - **Write-through save**: every slot is rewritten atomically; the session slot is removed
//!   rather than written as `null`.
//! - **Idempotent seeding**: [`Database::seed_if_empty`] only fills collections that are empty.
//!
//! ## Example
//!
//! ```rust
//! use gshop_database::{Database, DatabaseError};
//! use gshop_domain::config::SeedConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("mem://").namespace("gameshop").init().await?;
//!
//!     let mut state = db.load().await?;
//!     let report = db.seed_if_empty(&mut state, &SeedConfig::default()).await?;
//!     assert_eq!(report.applied.len(), 3);
//!     assert_eq!(db.load().await?, state);
//!
//!     Ok(())
//! }
//! ```

mod error;
mod seed;
mod slots;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use seed::{SeedReport, SeedStep};
pub use slots::Slot;

use gshop_domain::ShopState;
use gshop_domain::config::{SeedConfig, StorageConfig};
use gshop_storage::{Compression, NamespacedStorage, Storage};
use seed::SeedRunner;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

const FILE_SCHEME: &str = "file://";
const MEMORY_URL: &str = "mem://";

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    store: NamespacedStorage,
    url: String,
}

/// Slot-level access to the persisted shop state.
///
/// Cloning is cheap; all clones share one store.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Deref for Database {
    type Target = NamespacedStorage;

    fn deref(&self) -> &Self::Target {
        &self.inner.store
    }
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Reads every slot into a fresh [`ShopState`].
    ///
    /// Missing slots (and slots holding `null`) become empty collections / no session.
    ///
    /// # Errors
    /// * [`DatabaseError::Corrupted`] if a slot is present but is not valid JSON of the
    ///   expected shape.
    /// * [`DatabaseError::Storage`] if the store cannot be read.
    #[instrument(skip(self), fields(url = %self.inner.url))]
    pub async fn load(&self) -> Result<ShopState, DatabaseError> {
        let state = ShopState {
            users: self.read_slot(Slot::Users).await?.unwrap_or_default(),
            accounts: self.read_slot(Slot::Accounts).await?.unwrap_or_default(),
            pending_accounts: self.read_slot(Slot::PendingAccounts).await?.unwrap_or_default(),
            cart: self.read_slot(Slot::Cart).await?.unwrap_or_default(),
            donations: self.read_slot(Slot::Donations).await?.unwrap_or_default(),
            session: self.read_slot(Slot::CurrentSession).await?,
        };

        debug!(
            users = state.users.len(),
            accounts = state.accounts.len(),
            cart = state.cart.len(),
            donations = state.donations.len(),
            logged_in = state.session.is_some(),
            "State loaded"
        );
        Ok(state)
    }

    /// Writes every slot of `state`.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Storage`] if any slot cannot be written.
    #[instrument(skip_all, fields(url = %self.inner.url))]
    pub async fn save(&self, state: &ShopState) -> Result<(), DatabaseError> {
        self.write_slot(Slot::Users, &state.users).await?;
        self.write_slot(Slot::Accounts, &state.accounts).await?;
        self.write_slot(Slot::PendingAccounts, &state.pending_accounts).await?;
        self.write_slot(Slot::Cart, &state.cart).await?;
        self.write_slot(Slot::Donations, &state.donations).await?;

        match &state.session {
            Some(session) => self.write_slot(Slot::CurrentSession, session).await?,
            None => {
                let removed = self
                    .inner
                    .store
                    .delete(Slot::CurrentSession.key())
                    .await
                    .context("Clearing session slot")?;
                if removed {
                    trace!(slot = %Slot::CurrentSession, "Slot removed");
                }
            },
        }

        debug!("State saved");
        Ok(())
    }

    /// Bootstraps the admin user and sample data into empty collections, then saves.
    ///
    /// # Errors
    /// * [`DatabaseError::Password`] if the admin password cannot be hashed.
    /// * [`DatabaseError::Storage`] if the state cannot be saved.
    pub async fn seed_if_empty(
        &self,
        state: &mut ShopState,
        config: &SeedConfig,
    ) -> Result<SeedReport, DatabaseError> {
        let report = SeedRunner::new(config, chrono::Utc::now()).run(state)?;

        for skipped in &report.skipped {
            trace!(step = %skipped, "Skipping seed step");
        }
        for applied in &report.applied {
            info!(step = %applied, "Applied seed step");
        }

        self.save(state).await?;
        Ok(report)
    }

    async fn read_slot<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>, DatabaseError> {
        let Some(bytes) =
            self.inner.store.get(slot.key()).await.context(format!("Reading slot {slot}"))?
        else {
            trace!(%slot, "Slot absent, using default");
            return Ok(None);
        };

        serde_json::from_slice::<Option<T>>(&bytes).context(format!("Slot {slot}"))
    }

    async fn write_slot<T: Serialize + ?Sized>(
        &self,
        slot: Slot,
        value: &T,
    ) -> Result<(), DatabaseError> {
        let bytes = serde_json::to_vec(value).map_err(|e| DatabaseError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Encoding slot {slot}").into()),
        })?;

        self.inner.store.write(slot.key(), &bytes).await.context(format!("Writing slot {slot}"))
    }
}

/// A fluent builder for opening the persistence layer.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    namespace: Option<String>,
    compression: bool,
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the builder from the `storage` config section.
    pub fn config(self, config: &StorageConfig) -> Self {
        self.url(&config.url).namespace(&config.namespace).compression(config.compression)
    }

    /// Sets the connection URL: `file://<dir>` or `mem://`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the storage namespace the slots live in.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Enables transparent LZ4 compression of slot documents.
    pub const fn compression(mut self, enable: bool) -> Self {
        self.compression = enable;
        self
    }

    /// Opens the store.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if the URL is missing, has an unsupported scheme, or the
    ///   namespace is invalid.
    /// * [`DatabaseError::Storage`] if the root directory cannot be created.
    #[instrument(skip(self), fields(url = self.url, namespace = self.namespace))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let namespace = self.namespace.unwrap_or_else(|| StorageConfig::default().namespace);
        let compression = if self.compression { Compression::Lz4 } else { Compression::None };

        let connected = if url == MEMORY_URL {
            Storage::builder().in_memory().compression(compression).connect().await
        } else if let Some(dir) = url.strip_prefix(FILE_SCHEME).filter(|dir| !dir.is_empty()) {
            Storage::builder().root(dir).compression(compression).connect().await
        } else {
            return Err(DatabaseError::Validation {
                message: format!("Unsupported storage URL: {url}").into(),
                context: Some("Expected file://<dir> or mem://".into()),
            });
        };
        let storage = connected.context("Opening storage")?;

        let store = storage.namespace(namespace.as_str()).map_err(|e| DatabaseError::Validation {
            message: e.to_string().into(),
            context: Some("Invalid namespace".into()),
        })?;

        info!(%url, namespace = %store.name(), "Persistence layer ready");
        Ok(Database { inner: Arc::new(DatabaseInner { store, url }) })
    }
}
