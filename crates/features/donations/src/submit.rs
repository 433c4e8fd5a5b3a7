use crate::error::DonationError;
use gshop_domain::constants::{ANONYMOUS_DONOR, MIN_BANK_DONATION, MIN_CARD_DETAIL_LEN};
use gshop_domain::{Actor, Donation, DonationDetails, DonationStatus, ShopState, Timestamp};
use gshop_kernel::ids::next_id;
use tracing::info;

/// A prepaid scratch card donation.
#[derive(Debug, Clone, Copy)]
pub struct CardDonation<'a> {
    /// Carrier, e.g. `viettel`.
    pub card_type: &'a str,
    pub amount: u64,
    pub serial: &'a str,
    pub code: &'a str,
}

/// A bank or e-wallet transfer donation.
#[derive(Debug, Clone, Copy)]
pub struct BankDonation<'a> {
    pub method: &'a str,
    pub amount: u64,
    pub transfer_note: &'a str,
    /// Free-form message to the shop; may be empty.
    pub note: &'a str,
}

fn require_filled(fields: &[(&'static str, bool)]) -> Result<(), DonationError> {
    let missing: Vec<&str> = fields.iter().filter(|(_, filled)| !filled).map(|(name, _)| *name).collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DonationError::MissingFields { message: missing.join(", ").into(), context: None })
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn record<'s>(
    state: &'s mut ShopState,
    details: DonationDetails,
    method: &str,
    amount: u64,
    actor: Option<&Actor>,
    now: Timestamp,
) -> &'s Donation {
    let donor = actor.map_or(ANONYMOUS_DONOR, |a| a.username.as_str()).to_owned();
    let id = next_id(now, state.donations.iter().map(|d| d.id));
    info!(donation_id = id, channel = details.channel(), %method, amount, %donor, "Donation received");

    state.donations.push(Donation {
        id,
        details,
        method: method.trim().to_owned(),
        amount,
        donor,
        status: DonationStatus::Pending,
        created_at: now,
        reviewed_by: None,
        reviewed_at: None,
    });
    &state.donations[state.donations.len() - 1]
}

/// Records a pending card donation. Guests donate as [`ANONYMOUS_DONOR`].
///
/// # Errors
/// * [`DonationError::MissingFields`] when a field is blank or the amount is zero.
/// * [`DonationError::InvalidCardDetails`] when the serial or code is too short.
pub fn submit_card<'s>(
    state: &'s mut ShopState,
    card: &CardDonation<'_>,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<&'s Donation, DonationError> {
    require_filled(&[
        ("cardType", filled(card.card_type)),
        ("amount", card.amount > 0),
        ("serial", filled(card.serial)),
        ("code", filled(card.code)),
    ])?;
    let (serial, code) = (card.serial.trim(), card.code.trim());
    if serial.chars().count() < MIN_CARD_DETAIL_LEN || code.chars().count() < MIN_CARD_DETAIL_LEN {
        return Err(DonationError::InvalidCardDetails { min_len: MIN_CARD_DETAIL_LEN, context: None });
    }

    let details = DonationDetails::Card { serial: serial.to_owned(), code: code.to_owned() };
    Ok(record(state, details, card.card_type, card.amount, actor, now))
}

/// Records a pending bank donation.
///
/// # Errors
/// * [`DonationError::MissingFields`] when method or transfer note is blank or the amount is zero.
/// * [`DonationError::BelowMinimum`] under [`MIN_BANK_DONATION`].
pub fn submit_bank<'s>(
    state: &'s mut ShopState,
    bank: &BankDonation<'_>,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<&'s Donation, DonationError> {
    require_filled(&[
        ("method", filled(bank.method)),
        ("amount", bank.amount > 0),
        ("transferNote", filled(bank.transfer_note)),
    ])?;
    if bank.amount < MIN_BANK_DONATION {
        return Err(DonationError::BelowMinimum {
            amount: bank.amount,
            minimum: MIN_BANK_DONATION,
            context: None,
        });
    }

    let details = DonationDetails::Bank {
        transfer_note: bank.transfer_note.trim().to_owned(),
        note: bank.note.trim().to_owned(),
    };
    Ok(record(state, details, bank.method, bank.amount, actor, now))
}
