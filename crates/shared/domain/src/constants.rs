/// Donor label recorded when nobody is logged in.
pub const ANONYMOUS_DONOR: &str = "Anonymous";

/// Smallest accepted bank transfer, in minor units.
pub const MIN_BANK_DONATION: u64 = 10_000;

/// Minimum length of a scratch card serial and of its code.
pub const MIN_CARD_DETAIL_LEN: usize = 10;

/// Username of the seeded administrator.
pub const ADMIN_USERNAME: &str = "admin";

/// Highest price a listing may carry, in minor units.
pub const MAX_ACCOUNT_PRICE: u64 = 1_000_000_000_000;
