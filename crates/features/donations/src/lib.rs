//! # Donations
//!
//! Card and bank donations land as `pending`; an admin approves or rejects each one, and the
//! approved ones make up the public donor board.

mod board;
mod error;
mod review;
mod submit;

pub use board::{list_approved_donors, list_pending};
pub use error::{DonationError, DonationErrorExt};
pub use review::{Decision, review};
pub use submit::{BankDonation, CardDonation, submit_bank, submit_card};
