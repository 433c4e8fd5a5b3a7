use std::borrow::Cow;

/// Errors that can occur while setting up the activity feed.
#[gshop_derive::shop_error]
pub enum ActivityError {
    /// Capacity must be greater than zero.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
