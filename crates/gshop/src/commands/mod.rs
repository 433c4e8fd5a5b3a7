//! `Shop` commands grouped by feature. Each file adds an `impl Shop` block.

mod accounts;
mod cart;
mod donations;
mod session;
