use gshop_kernel::security::password::PasswordError;
use gshop_storage::StorageError;
use std::borrow::Cow;

/// A specialized [`DatabaseError`] enum of this crate.
///
/// Everything except a seeding hash failure classifies as
/// [`ErrorKind::Persistence`](gshop_domain::ErrorKind::Persistence).
#[gshop_derive::shop_error]
pub enum DatabaseError {
    /// Bad connection parameters.
    #[kind(Persistence)]
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The key-value store failed underneath.
    #[kind(Persistence)]
    #[error("Storage error{}: {source}", format_context(.context))]
    Storage {
        #[source]
        source: StorageError,
        context: Option<Cow<'static, str>>,
    },

    /// A slot exists but does not hold the expected JSON document.
    #[kind(Persistence)]
    #[error("Corrupted slot{}: {source}", format_context(.context))]
    Corrupted {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Hashing the seeded admin password failed.
    #[kind(source)]
    #[error("Seeding failed{}: {source}", format_context(.context))]
    Password {
        #[source]
        source: PasswordError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[kind(Persistence)]
    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
