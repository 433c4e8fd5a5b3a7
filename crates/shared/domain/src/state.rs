use crate::account::Account;
use crate::cart::CartItem;
use crate::donation::Donation;
use crate::user::{Session, User};

/// The whole mutable state of the shop.
///
/// One value of this type is hydrated at startup and handed to every domain operation; there is
/// no other place where shop data lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopState {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    /// Reserved slot. Kept so stored data round-trips, never written by the shop itself.
    pub pending_accounts: Vec<Account>,
    pub cart: Vec<CartItem>,
    pub donations: Vec<Donation>,
    pub session: Option<Session>,
}

impl ShopState {
    #[must_use]
    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_mut(&mut self, id: u64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }
}
