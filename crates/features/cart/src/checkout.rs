use crate::error::CartError;
use gshop_catalog::mark_sold;
use gshop_domain::{Actor, ShopState, Timestamp};
use tracing::{info, warn};

/// What a checkout actually settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    /// Accounts now sold to the buyer, in cart order.
    pub settled: Vec<u64>,
    /// Cart items whose account vanished or stopped being active.
    pub skipped: Vec<u64>,
    /// Sum of the settled snapshot prices, saturating at `u64::MAX`.
    pub total: u64,
}

impl Receipt {
    #[must_use]
    pub const fn items(&self) -> usize {
        self.settled.len()
    }
}

/// Buys everything in the cart that is still for sale and empties it.
///
/// # Errors
/// [`CartError::EmptyCart`] first, then [`CartError::Unauthorized`].
pub fn checkout(
    state: &mut ShopState,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<Receipt, CartError> {
    if state.cart.is_empty() {
        return Err(CartError::EmptyCart { context: None });
    }
    let actor = actor.ok_or(CartError::Unauthorized { context: None })?;

    let mut receipt = Receipt::default();
    for item in std::mem::take(&mut state.cart) {
        match state.account_mut(item.id).filter(|a| a.is_active()) {
            Some(account) => {
                mark_sold(account, &actor.username, now);
                receipt.settled.push(item.id);
                receipt.total = receipt.total.saturating_add(item.price);
            },
            None => {
                warn!(account_id = item.id, "Cart item no longer available, skipped");
                receipt.skipped.push(item.id);
            },
        }
    }

    info!(
        buyer = %actor.username,
        settled = receipt.settled.len(),
        skipped = receipt.skipped.len(),
        total = receipt.total,
        "Checkout complete"
    );
    Ok(receipt)
}
