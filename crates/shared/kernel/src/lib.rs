//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, config loading, and
//! credential handling.
//!
//! ## ID generation
//! Identifiers are creation-time tokens that never collide within one collection:
//! ```rust
//! # use gshop_kernel::ids::next_id;
//! let now = chrono::Utc::now();
//! let first = next_id(now, []);
//! let second = next_id(now, [first]);
//! assert!(second > first);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use gshop_kernel::config::load_config;
//! let cfg: gshop_domain::config::ShopConfig = load_config(Some("gameshop.toml"))?;
//! ```
pub mod config;
pub mod ids;
pub mod security;

pub use gshop_domain as domain;
