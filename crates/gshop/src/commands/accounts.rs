use crate::Shop;
use crate::error::ShopError;
use chrono::Utc;
use gshop_activity::Activity;
use gshop_catalog::{AccountDraft, AccountFilter, AccountPatch};
use gshop_domain::Account;

impl Shop {
    #[must_use]
    pub fn list_accounts(&self, filter: &AccountFilter) -> Vec<&Account> {
        gshop_catalog::list_active(&self.state, filter)
    }

    /// # Errors
    /// [`gshop_catalog::CatalogError::NotFound`] for an unknown id.
    pub fn account(&self, id: u64) -> Result<&Account, ShopError> {
        Ok(gshop_catalog::get_by_id(&self.state, id)?)
    }

    #[must_use]
    pub fn all_accounts(&self) -> Vec<&Account> {
        gshop_catalog::list_all(&self.state)
    }

    #[must_use]
    pub fn pending_accounts(&self) -> Vec<&Account> {
        gshop_catalog::list_pending(&self.state)
    }

    /// Admin listing straight into the storefront. Returns the new id.
    ///
    /// # Errors
    /// Authorization or validation failures from the catalog, or a persistence error.
    pub async fn submit_account(&mut self, draft: AccountDraft) -> Result<u64, ShopError> {
        let actor = self.actor();
        let id = gshop_catalog::submit(&mut self.state, draft, actor.as_ref(), Utc::now())?;
        self.commit(None).await?;
        Ok(id)
    }

    /// Queues an account for admin review. Returns the new id.
    ///
    /// # Errors
    /// Authorization or validation failures from the catalog, or a persistence error.
    pub async fn propose_account(&mut self, draft: AccountDraft) -> Result<u64, ShopError> {
        let actor = self.actor();
        let id = gshop_catalog::propose(&mut self.state, draft, actor.as_ref(), Utc::now())?;
        self.commit(None).await?;
        Ok(id)
    }

    /// # Errors
    /// `Unauthorized`, `NotFound` or `InvalidState` from the catalog, or a persistence error.
    pub async fn approve_account(&mut self, id: u64) -> Result<Account, ShopError> {
        let actor = self.actor();
        let account =
            gshop_catalog::approve(&mut self.state, id, actor.as_ref(), Utc::now())?.clone();
        self.commit(None).await?;
        Ok(account)
    }

    /// # Errors
    /// `Unauthorized`, `NotFound` or `InvalidState` from the catalog, or a persistence error.
    pub async fn reject_account(&mut self, id: u64) -> Result<Account, ShopError> {
        let actor = self.actor();
        let account = gshop_catalog::reject(&mut self.state, id, actor.as_ref())?;
        self.commit(None).await?;
        Ok(account)
    }

    /// # Errors
    /// `Unauthorized` or `NotFound` from the catalog, or a persistence error.
    pub async fn delete_account(&mut self, id: u64) -> Result<Account, ShopError> {
        let actor = self.actor();
        let account = gshop_catalog::delete(&mut self.state, id, actor.as_ref())?;
        self.commit(None).await?;
        Ok(account)
    }

    /// # Errors
    /// Authorization, lookup, state or validation failures from the catalog, or a persistence
    /// error.
    pub async fn edit_account(&mut self, id: u64, patch: AccountPatch) -> Result<Account, ShopError> {
        let actor = self.actor();
        let account = gshop_catalog::edit(&mut self.state, id, patch, actor.as_ref())?.clone();
        self.commit(None).await?;
        Ok(account)
    }

    /// Buys one account directly.
    ///
    /// # Errors
    /// `Unauthorized`, `NotFound` or `Unavailable` from the catalog, or a persistence error.
    pub async fn purchase(&mut self, id: u64) -> Result<Account, ShopError> {
        let actor = self.actor();
        let account =
            gshop_catalog::purchase(&mut self.state, id, actor.as_ref(), Utc::now())?.clone();

        let activity = Activity::Purchase {
            account_id: account.id,
            game: account.game,
            rank: account.rank.clone(),
            amount: account.price,
        };
        self.commit(account.buyer.clone().map(|buyer| (buyer, activity))).await?;
        Ok(account)
    }
}
