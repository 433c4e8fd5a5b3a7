use gshop_kernel::security::password::PasswordError;
use std::borrow::Cow;

/// Error types specific to the auth feature.
#[gshop_derive::shop_error]
pub enum AuthError {
    #[kind(Validation)]
    #[error("Passwords do not match{}", format_context(.context))]
    PasswordMismatch { context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Username is already taken{}: {message}", format_context(.context))]
    DuplicateUsername { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Email is already registered{}: {message}", format_context(.context))]
    DuplicateEmail { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[kind(Validation)]
    #[error("Missing required fields{}: {message}", format_context(.context))]
    MissingFields { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Unknown user and wrong password are deliberately indistinguishable.
    #[kind(Authorization)]
    #[error("Invalid username or password{}", format_context(.context))]
    InvalidCredentials { context: Option<Cow<'static, str>> },

    #[kind(source)]
    #[error("Credential hashing failed{}: {source}", format_context(.context))]
    Password {
        #[source]
        source: PasswordError,
        context: Option<Cow<'static, str>>,
    },
}
