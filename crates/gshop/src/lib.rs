//! # `GameShop`
//!
//! Facade over the feature slices. Front ends open a [`Shop`] and call its commands; the
//! feature crates stay synchronous and storage-agnostic.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), gshop::ShopError> {
//! let config = gshop::domain::config::ShopConfig::default();
//! let mut shop = gshop::Shop::open(&config).await?;
//! shop.login("admin", "admin123").await?;
//! println!("{} accounts for sale", shop.list_accounts(&Default::default()).len());
//! # Ok(())
//! # }
//! ```

mod commands;
mod error;
mod shop;

pub use error::{ShopError, ShopErrorExt};
pub use shop::Shop;

pub use gshop_activity as activity;
pub use gshop_database as database;
pub use gshop_domain as domain;
pub use gshop_kernel as kernel;

/// Feature slices, re-exported for their input and outcome types.
pub mod features {
    pub use gshop_auth as auth;
    pub use gshop_cart as cart;
    pub use gshop_catalog as catalog;
    pub use gshop_donations as donations;
}
