use crate::error::DonationError;
use gshop_domain::{Actor, Donation, DonationStatus, ShopState, Timestamp};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    const fn status(self) -> DonationStatus {
        match self {
            Self::Approve => DonationStatus::Approved,
            Self::Reject => DonationStatus::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        })
    }
}

/// Settles a pending donation.
///
/// # Errors
/// `Unauthorized` for non-admins, then `NotFound`, then `InvalidState` unless pending.
pub fn review<'s>(
    state: &'s mut ShopState,
    id: u64,
    decision: Decision,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<&'s Donation, DonationError> {
    let Some(actor) = actor.filter(|a| a.is_admin) else {
        return Err(DonationError::Unauthorized { context: None });
    };
    let donation = state
        .donations
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or(DonationError::NotFound { id, context: None })?;
    if donation.status != DonationStatus::Pending {
        return Err(DonationError::InvalidState { id, status: donation.status, context: None });
    }

    donation.status = decision.status();
    donation.reviewed_by = Some(actor.username.clone());
    donation.reviewed_at = Some(now);
    info!(donation_id = id, %decision, reviewer = %actor.username, "Donation reviewed");

    Ok(&*donation)
}
