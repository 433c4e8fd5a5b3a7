use std::borrow::Cow;

/// Error types specific to the catalog feature.
#[gshop_derive::shop_error]
pub enum CatalogError {
    #[kind(Authorization)]
    #[error("Not allowed{}: {message}", format_context(.context))]
    Unauthorized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(NotFound)]
    #[error("Account not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The lifecycle does not allow this transition.
    #[kind(StateConflict)]
    #[error("Invalid account state{}: {message}", format_context(.context))]
    InvalidState { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The account exists but is not for sale.
    #[kind(StateConflict)]
    #[error("Account is not available{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Missing required fields{}: {message}", format_context(.context))]
    MissingFields { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Invalid price{}: {message}", format_context(.context))]
    InvalidPrice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Invalid filter{}: {message}", format_context(.context))]
    InvalidFilter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    pub(crate) fn not_found(id: u64) -> Self {
        Self::NotFound { message: id.to_string().into(), context: None }
    }
}
