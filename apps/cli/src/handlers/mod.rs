pub(crate) mod accounts;
pub(crate) mod cart;
pub(crate) mod donations;
pub(crate) mod session;
