use crate::error::ShopError;
use gshop_activity::{Activity, ActivityFeed};
use gshop_database::{Database, SeedReport};
use gshop_domain::config::ShopConfig;
use gshop_domain::{Actor, ShopState};
use tracing::{debug, info, instrument};

/// The running shop: the in-memory state, its store and the activity feed.
///
/// Commands need `&mut self`; the state has exactly one writer. Each command runs the domain
/// operation, saves every slot, and only then publishes its activity record.
#[derive(Debug)]
pub struct Shop {
    pub(crate) state: ShopState,
    database: Database,
    activity: ActivityFeed,
    config: ShopConfig,
}

impl Shop {
    /// Opens the configured store, hydrates the state and seeds it when enabled.
    ///
    /// # Errors
    /// * [`ShopError::Database`] if the store cannot be opened, read or seeded.
    /// * [`ShopError::Activity`] if the activity capacity is zero.
    #[instrument(skip_all, fields(url = %config.storage.url))]
    pub async fn open(config: &ShopConfig) -> Result<Self, ShopError> {
        let database = Database::builder().config(&config.storage).init().await?;
        let activity = ActivityFeed::new(config.activity.capacity)?;

        let mut shop = Self::with_parts(database, activity, config.clone()).await?;
        if config.seed.enabled {
            shop.seed().await?;
        }

        info!(
            users = shop.state.users.len(),
            accounts = shop.state.accounts.len(),
            logged_in = shop.state.session.is_some(),
            "Shop opened"
        );
        Ok(shop)
    }

    /// Hydrates a shop from an already opened store without seeding.
    ///
    /// # Errors
    /// Returns [`ShopError::Database`] if a slot cannot be read.
    pub async fn with_parts(
        database: Database,
        activity: ActivityFeed,
        config: ShopConfig,
    ) -> Result<Self, ShopError> {
        let state = database.load().await?;
        Ok(Self { state, database, activity, config })
    }

    /// Runs the idempotent first-run bootstrap.
    ///
    /// # Errors
    /// Returns [`ShopError::Database`] if hashing or saving fails.
    pub async fn seed(&mut self) -> Result<SeedReport, ShopError> {
        Ok(self.database.seed_if_empty(&mut self.state, &self.config.seed).await?)
    }

    #[must_use]
    pub const fn state(&self) -> &ShopState {
        &self.state
    }

    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    #[must_use]
    pub const fn activity(&self) -> &ActivityFeed {
        &self.activity
    }

    #[must_use]
    pub const fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Who the session resolves to right now.
    #[must_use]
    pub fn actor(&self) -> Option<Actor> {
        gshop_auth::current_actor(&self.state)
    }

    /// Writes the state through and then announces `activity`.
    pub(crate) async fn commit(
        &self,
        activity: Option<(String, Activity)>,
    ) -> Result<(), ShopError> {
        self.database.save(&self.state).await?;
        if let Some((username, activity)) = activity {
            debug!(kind = activity.kind(), %username, "Publishing activity");
            self.activity.publish(username, activity);
        }
        Ok(())
    }
}
