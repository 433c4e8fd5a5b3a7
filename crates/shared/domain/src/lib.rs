//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `chrono`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.
//!
//! Every persisted model serializes with camelCase field names so the stored slots stay
//! self-describing JSON.

pub mod account;
pub mod cart;
pub mod config;
pub mod constants;
pub mod donation;
pub mod error;
pub mod game;
pub mod state;
pub mod user;

pub use account::{Account, AccountStatus};
pub use cart::CartItem;
pub use donation::{Donation, DonationDetails, DonationStatus};
pub use error::ErrorKind;
pub use game::GameCode;
pub use state::ShopState;
pub use user::{Actor, Session, User};

/// Every timestamp in the shop is UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
