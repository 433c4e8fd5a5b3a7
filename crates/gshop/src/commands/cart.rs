use crate::Shop;
use crate::error::ShopError;
use chrono::Utc;
use gshop_activity::Activity;
use gshop_cart::{ClearOutcome, Receipt};
use gshop_domain::CartItem;

impl Shop {
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.state.cart
    }

    #[must_use]
    pub fn cart_total(&self) -> u64 {
        gshop_cart::total(&self.state)
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        gshop_cart::count(&self.state)
    }

    /// # Errors
    /// * [`gshop_cart::CartError::DuplicateItem`] is a warning; check
    ///   [`ShopError::is_warning`].
    /// * `Unauthorized` / `Unavailable`, or a persistence error.
    pub async fn add_to_cart(&mut self, account_id: u64) -> Result<CartItem, ShopError> {
        let actor = self.actor();
        let item = gshop_cart::add(&mut self.state, account_id, actor.as_ref())?.clone();
        self.commit(None).await?;
        Ok(item)
    }

    /// Returns whether the item was in the cart.
    ///
    /// # Errors
    /// Only persistence failures.
    pub async fn remove_from_cart(&mut self, account_id: u64) -> Result<bool, ShopError> {
        let removed = gshop_cart::remove(&mut self.state, account_id);
        if removed {
            self.commit(None).await?;
        }
        Ok(removed)
    }

    /// # Errors
    /// Only persistence failures.
    pub async fn clear_cart(&mut self) -> Result<ClearOutcome, ShopError> {
        let outcome = gshop_cart::clear(&mut self.state);
        if matches!(outcome, ClearOutcome::Cleared(_)) {
            self.commit(None).await?;
        }
        Ok(outcome)
    }

    /// Settles the cart in one write.
    ///
    /// # Errors
    /// `EmptyCart`, then `Unauthorized`, or a persistence error.
    pub async fn checkout(&mut self) -> Result<Receipt, ShopError> {
        let actor = self.actor();
        let receipt = gshop_cart::checkout(&mut self.state, actor.as_ref(), Utc::now())?;

        let activity = Activity::Checkout { items: receipt.items(), amount: receipt.total };
        self.commit(actor.map(|a| (a.username, activity))).await?;
        Ok(receipt)
    }
}
