use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        })
    }
}

/// Channel-specific payload, tagged by `type` in the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DonationDetails {
    Card {
        #[serde(default)]
        serial: String,
        #[serde(default)]
        code: String,
    },
    Bank {
        #[serde(default, rename = "transferNote")]
        transfer_note: String,
        #[serde(default)]
        note: String,
    },
}

impl DonationDetails {
    #[must_use]
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Card { .. } => "card",
            Self::Bank { .. } => "bank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u64,
    #[serde(flatten)]
    pub details: DonationDetails,
    /// Card carrier or bank/wallet name.
    pub method: String,
    pub amount: u64,
    pub donor: String,
    pub status: DonationStatus,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<Timestamp>,
}
