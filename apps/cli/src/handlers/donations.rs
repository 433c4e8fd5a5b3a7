use crate::args::{DonateAction, DonationAction};
use crate::output;
use anyhow::Result;
use gshop::Shop;
use gshop::features::donations::{BankDonation, CardDonation, Decision};
use std::io::Write;

pub(crate) async fn donate(shop: &mut Shop, action: DonateAction, out: &mut impl Write) -> Result<()> {
    let donation = match &action {
        DonateAction::Card { card_type, amount, serial, code } => {
            let card = CardDonation { card_type, amount: *amount, serial, code };
            shop.donate_card(&card).await?
        },
        DonateAction::Bank { method, amount, transfer_note, note } => {
            let bank = BankDonation { method, amount: *amount, transfer_note, note };
            shop.donate_bank(&bank).await?
        },
    };
    writeln!(
        out,
        "Thank you, {}! Donation #{} of {} is awaiting review.",
        donation.donor,
        donation.id,
        output::price(donation.amount)
    )?;
    Ok(())
}

pub(crate) async fn handle(shop: &mut Shop, action: DonationAction, out: &mut impl Write) -> Result<()> {
    match action {
        DonationAction::Donors => {
            let donors = shop.donors();
            if donors.is_empty() {
                writeln!(out, "No donations yet")?;
            }
            for (rank, donation) in donors.into_iter().enumerate() {
                writeln!(out, "{:>3}. {:<24} {:>14}", rank + 1, donation.donor, output::price(donation.amount))?;
            }
        },
        DonationAction::Pending => {
            let pending = shop.pending_donations();
            if pending.is_empty() {
                writeln!(out, "No donations awaiting review")?;
            }
            for donation in pending {
                output::donation_line(out, donation)?;
            }
        },
        DonationAction::Approve { id } => review(shop, id, Decision::Approve, out).await?,
        DonationAction::Reject { id } => review(shop, id, Decision::Reject, out).await?,
    }
    Ok(())
}

async fn review(shop: &mut Shop, id: u64, decision: Decision, out: &mut impl Write) -> Result<()> {
    let donation = shop.review_donation(id, decision).await?;
    writeln!(out, "Donation #{} is now {}", donation.id, donation.status)?;
    Ok(())
}
