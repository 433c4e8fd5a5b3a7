use crate::error::CatalogError;
use crate::filter::AccountFilter;
use gshop_domain::{Account, ShopState};

/// Active listings in insertion order, narrowed by `filter`.
#[must_use]
pub fn list_active<'a>(state: &'a ShopState, filter: &AccountFilter) -> Vec<&'a Account> {
    state.accounts.iter().filter(|a| a.is_active() && filter.matches(a)).collect()
}

/// # Errors
/// [`CatalogError::NotFound`] when no account has this id.
pub fn get_by_id(state: &ShopState, id: u64) -> Result<&Account, CatalogError> {
    state.account(id).ok_or_else(|| CatalogError::not_found(id))
}

/// Every account regardless of status.
#[must_use]
pub fn list_all(state: &ShopState) -> Vec<&Account> {
    state.accounts.iter().collect()
}

/// The review queue.
#[must_use]
pub fn list_pending(state: &ShopState) -> Vec<&Account> {
    state.accounts.iter().filter(|a| a.is_pending()).collect()
}
