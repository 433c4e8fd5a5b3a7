use crate::error::CartError;
use gshop_domain::{Actor, CartItem, ShopState};
use tracing::{debug, info};

/// Result of [`clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    /// Nothing to clear; shown as a warning.
    AlreadyEmpty,
}

/// Snapshots an active account into the cart.
///
/// # Errors
/// * [`CartError::Unauthorized`] when nobody is logged in.
/// * [`CartError::Unavailable`] for an unknown or non-active account.
/// * [`CartError::DuplicateItem`] if it is already in the cart (a warning).
pub fn add<'a>(
    state: &'a mut ShopState,
    account_id: u64,
    actor: Option<&Actor>,
) -> Result<&'a CartItem, CartError> {
    let actor = actor.ok_or(CartError::Unauthorized { context: None })?;

    let account = state
        .account(account_id)
        .filter(|a| a.is_active())
        .ok_or(CartError::Unavailable { id: account_id, context: None })?;
    if state.cart.iter().any(|item| item.id == account_id) {
        debug!(account_id, "Account already in cart");
        return Err(CartError::DuplicateItem { id: account_id, context: None });
    }

    let item = CartItem::from(account);
    info!(account_id, username = %actor.username, price = item.price, "Added to cart");
    state.cart.push(item);

    Ok(&state.cart[state.cart.len() - 1])
}

/// Drops an item. Returns whether anything was removed.
pub fn remove(state: &mut ShopState, account_id: u64) -> bool {
    let before = state.cart.len();
    state.cart.retain(|item| item.id != account_id);
    let removed = state.cart.len() != before;
    if removed {
        debug!(account_id, "Removed from cart");
    }
    removed
}

pub fn clear(state: &mut ShopState) -> ClearOutcome {
    if state.cart.is_empty() {
        return ClearOutcome::AlreadyEmpty;
    }
    let count = state.cart.len();
    state.cart.clear();
    debug!(count, "Cart cleared");
    ClearOutcome::Cleared(count)
}

/// Sum of the snapshot prices, saturating at `u64::MAX`.
#[must_use]
pub fn total(state: &ShopState) -> u64 {
    state.cart.iter().fold(0, |sum, item| sum.saturating_add(item.price))
}

#[must_use]
pub fn count(state: &ShopState) -> usize {
    state.cart.len()
}
