//! # Catalog
//!
//! The storefront listing and the account lifecycle `pending -> active -> sold`.
//!
//! Queries borrow the [`ShopState`](gshop_domain::ShopState); commands take it mutably and
//! validate completely before changing anything, so a failed command leaves the state as it
//! was. Admin checks run before lookups: a non-admin learns nothing about which ids exist.
//!
//! ```rust
//! use gshop_catalog::{AccountFilter, list_active};
//! use gshop_domain::ShopState;
//!
//! let filter = AccountFilter::parse(Some("lol"), Some("100000-500000"))?;
//! assert!(list_active(&ShopState::default(), &filter).is_empty());
//! # Ok::<(), gshop_catalog::CatalogError>(())
//! ```

mod commands;
mod draft;
mod error;
mod filter;
mod queries;

pub use commands::{approve, delete, edit, mark_sold, propose, purchase, reject, submit};
pub use draft::{AccountDraft, AccountPatch};
pub use error::{CatalogError, CatalogErrorExt};
pub use filter::{AccountFilter, PriceRange};
pub use queries::{get_by_id, list_active, list_all, list_pending};
