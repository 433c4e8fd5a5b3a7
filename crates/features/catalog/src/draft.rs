use crate::error::CatalogError;
use gshop_domain::constants::MAX_ACCOUNT_PRICE;
use gshop_domain::{Account, GameCode};

/// Display fields of a new listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub game: GameCode,
    pub rank: String,
    pub server: String,
    pub price: u64,
    pub description: String,
    pub image: Option<String>,
}

impl AccountDraft {
    /// Checks the draft and normalizes an empty image to `None`.
    pub(crate) fn validated(mut self) -> Result<Self, CatalogError> {
        check_display_fields(&self.rank, &self.server, self.price)?;
        self.image = normalize_image(self.image);
        Ok(self)
    }
}

/// Partial update of a listing's display fields. `None` keeps the current value.
///
/// An empty `image` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub game: Option<GameCode>,
    pub rank: Option<String>,
    pub server: Option<String>,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl AccountPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates the patched result against `account` without touching it.
    pub(crate) fn check_against(&self, account: &Account) -> Result<(), CatalogError> {
        check_display_fields(
            self.rank.as_deref().unwrap_or(&account.rank),
            self.server.as_deref().unwrap_or(&account.server),
            self.price.unwrap_or(account.price),
        )
    }

    pub(crate) fn apply(self, account: &mut Account) {
        if let Some(game) = self.game {
            account.game = game;
        }
        if let Some(rank) = self.rank {
            account.rank = rank;
        }
        if let Some(server) = self.server {
            account.server = server;
        }
        if let Some(price) = self.price {
            account.price = price;
        }
        if let Some(description) = self.description {
            account.description = description;
        }
        if let Some(image) = self.image {
            account.image = normalize_image(Some(image));
        }
    }
}

fn check_display_fields(rank: &str, server: &str, price: u64) -> Result<(), CatalogError> {
    let missing: Vec<&str> = [("rank", rank), ("server", server)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::MissingFields { message: missing.join(", ").into(), context: None });
    }
    if price == 0 {
        return Err(CatalogError::InvalidPrice {
            message: "price must be greater than zero".into(),
            context: None,
        });
    }
    if price > MAX_ACCOUNT_PRICE {
        return Err(CatalogError::InvalidPrice {
            message: format!("price must not exceed {MAX_ACCOUNT_PRICE}").into(),
            context: None,
        });
    }
    Ok(())
}

fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|url| !url.trim().is_empty())
}
