use std::borrow::Cow;

/// Error types specific to the donation ledger.
#[gshop_derive::shop_error]
pub enum DonationError {
    /// Lists the blank fields, comma separated.
    #[kind(Validation)]
    #[error("Missing required fields{}: {message}", format_context(.context))]
    MissingFields { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Card serial and code need at least {min_len} characters{}", format_context(.context))]
    InvalidCardDetails { min_len: usize, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Bank donations start at {minimum}, got {amount}{}", format_context(.context))]
    BelowMinimum { amount: u64, minimum: u64, context: Option<Cow<'static, str>> },

    #[kind(Authorization)]
    #[error("Admin privileges required{}", format_context(.context))]
    Unauthorized { context: Option<Cow<'static, str>> },

    #[kind(NotFound)]
    #[error("Donation {id} not found{}", format_context(.context))]
    NotFound { id: u64, context: Option<Cow<'static, str>> },

    #[kind(StateConflict)]
    #[error("Donation {id} was already {status}{}", format_context(.context))]
    InvalidState { id: u64, status: gshop_domain::DonationStatus, context: Option<Cow<'static, str>> },
}
