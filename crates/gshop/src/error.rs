use gshop_activity::ActivityError;
use gshop_auth::AuthError;
use gshop_cart::CartError;
use gshop_catalog::CatalogError;
use gshop_database::DatabaseError;
use gshop_donations::DonationError;
use std::borrow::Cow;

/// Every failure a [`Shop`](crate::Shop) command can report.
#[gshop_derive::shop_error]
pub enum ShopError {
    #[kind(source)]
    #[error("{source}{}", format_context(.context))]
    Auth { source: AuthError, context: Option<Cow<'static, str>> },

    #[kind(source)]
    #[error("{source}{}", format_context(.context))]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },

    #[kind(source)]
    #[error("{source}{}", format_context(.context))]
    Cart { source: CartError, context: Option<Cow<'static, str>> },

    #[kind(source)]
    #[error("{source}{}", format_context(.context))]
    Donation { source: DonationError, context: Option<Cow<'static, str>> },

    #[kind(source)]
    #[error("{source}{}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    #[kind(Internal)]
    #[error("Activity feed{}: {source}", format_context(.context))]
    Activity { source: ActivityError, context: Option<Cow<'static, str>> },
}

impl ShopError {
    /// Persistence and internal failures; the process should not carry on.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind().is_fatal()
    }

    /// Outcomes the front end shows as a warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Cart { source, .. } if source.is_warning())
    }
}
