use crate::error::CatalogError;
use gshop_domain::{Account, GameCode};
use std::fmt;
use std::str::FromStr;

/// Inclusive price bounds: `"min-max"` or the open-ended `"min+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    #[must_use]
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = |reason: &'static str| CatalogError::InvalidFilter {
            message: raw.to_owned().into(),
            context: Some(reason.into()),
        };
        let bound = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid("Bounds must be whole numbers"));

        if let Some(min) = raw.strip_suffix('+') {
            return Ok(Self { min: bound(min)?, max: None });
        }

        let Some((min, max)) = raw.split_once('-') else {
            return Err(invalid("Expected \"min-max\" or \"min+\""));
        };
        let (min, max) = (bound(min)?, bound(max)?);
        if min > max {
            return Err(invalid("Lower bound exceeds upper bound"));
        }

        Ok(Self { min, max: Some(max) })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{max}", self.min),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Optional narrowing of the storefront listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountFilter {
    pub game: Option<GameCode>,
    pub price: Option<PriceRange>,
}

impl AccountFilter {
    /// Builds a filter from raw front-end input; blank values mean "no constraint".
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidFilter`] for an unknown game code or a malformed range.
    pub fn parse(game: Option<&str>, price: Option<&str>) -> Result<Self, CatalogError> {
        let game = game
            .filter(|g| !g.trim().is_empty())
            .map(|g| {
                g.parse::<GameCode>().map_err(|e| CatalogError::InvalidFilter {
                    message: e.to_string().into(),
                    context: None,
                })
            })
            .transpose()?;
        let price = price.filter(|p| !p.trim().is_empty()).map(str::parse).transpose()?;

        Ok(Self { game, price })
    }

    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        self.game.is_none_or(|game| account.game == game)
            && self.price.is_none_or(|range| range.contains(account.price))
    }
}
