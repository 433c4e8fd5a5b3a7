//! # Cart
//!
//! A single shared cart of account snapshots. Items keep the price they had when added;
//! checkout settles whatever is still active and silently skips the rest.

mod cart;
mod checkout;
mod error;

pub use cart::{ClearOutcome, add, clear, count, remove, total};
pub use checkout::{Receipt, checkout};
pub use error::{CartError, CartErrorExt};
