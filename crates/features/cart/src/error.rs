use std::borrow::Cow;

#[gshop_derive::shop_error]
pub enum CartError {
    #[kind(Authorization)]
    #[error("Login required{}", format_context(.context))]
    Unauthorized { context: Option<Cow<'static, str>> },

    #[kind(StateConflict)]
    #[error("Account {id} is not available{}", format_context(.context))]
    Unavailable { id: u64, context: Option<Cow<'static, str>> },

    #[kind(StateConflict)]
    #[error("Account {id} is already in the cart{}", format_context(.context))]
    DuplicateItem { id: u64, context: Option<Cow<'static, str>> },

    #[kind(StateConflict)]
    #[error("Cart is empty{}", format_context(.context))]
    EmptyCart { context: Option<Cow<'static, str>> },
}

impl CartError {
    /// Outcomes the front end shows as a warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::DuplicateItem { .. })
    }
}
