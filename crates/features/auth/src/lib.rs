//! # Auth
//!
//! The user registry and the login session.
//!
//! Passwords are stored only as salted argon2 hashes. The session is part of
//! [`ShopState`](gshop_domain::ShopState) so it survives restarts through the normal save path;
//! everything else in the shop resolves "who is acting" through [`current_actor`].

mod error;
mod register;
mod session;

pub use error::{AuthError, AuthErrorExt};
pub use register::{Registration, register};
pub use session::{current_actor, current_user, is_admin, login, logout};
