use std::fmt;

/// One persisted collection of the shop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Users,
    Accounts,
    PendingAccounts,
    Cart,
    Donations,
    CurrentSession,
}

impl Slot {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Accounts => "accounts",
            Self::PendingAccounts => "pendingAccounts",
            Self::Cart => "cart",
            Self::Donations => "donations",
            Self::CurrentSession => "currentSession",
        }
    }

    /// Storage key of the slot document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Users => "users.json",
            Self::Accounts => "accounts.json",
            Self::PendingAccounts => "pendingAccounts.json",
            Self::Cart => "cart.json",
            Self::Donations => "donations.json",
            Self::CurrentSession => "currentSession.json",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
