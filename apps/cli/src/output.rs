//! Plain-text rendering of shop records.

use gshop::domain::{Account, CartItem, Donation, DonationDetails};
use std::io::{self, Write};

/// Formats minor units the way the storefront shows them: `500.000 ₫`.
pub(crate) fn price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str(" ₫");
    grouped
}

pub(crate) fn account_line(out: &mut impl Write, account: &Account) -> io::Result<()> {
    writeln!(
        out,
        "#{:<14} {:<18} {:<12} {:<8} {:>14}  [{}]",
        account.id,
        account.game.display_name(),
        account.rank,
        account.server,
        price(account.price),
        account.status,
    )
}

pub(crate) fn account_details(out: &mut impl Write, account: &Account) -> io::Result<()> {
    writeln!(out, "Account #{}", account.id)?;
    writeln!(out, "  Game:        {}", account.game.display_name())?;
    writeln!(out, "  Rank:        {}", account.rank)?;
    writeln!(out, "  Server:      {}", account.server)?;
    writeln!(out, "  Price:       {}", price(account.price))?;
    writeln!(out, "  Status:      {}", account.status)?;
    if !account.description.is_empty() {
        writeln!(out, "  Description: {}", account.description)?;
    }
    if let Some(image) = &account.image {
        writeln!(out, "  Image:       {image}")?;
    }
    writeln!(out, "  Listed by:   {} at {}", account.created_by, account.created_at.to_rfc3339())?;
    if let (Some(by), Some(at)) = (&account.approved_by, account.approved_at) {
        writeln!(out, "  Approved by: {by} at {}", at.to_rfc3339())?;
    }
    if let (Some(buyer), Some(at)) = (&account.buyer, account.sold_at) {
        writeln!(out, "  Sold to:     {buyer} at {}", at.to_rfc3339())?;
    }
    Ok(())
}

pub(crate) fn cart_line(out: &mut impl Write, item: &CartItem) -> io::Result<()> {
    writeln!(
        out,
        "#{:<14} {:<18} {:<12} {:<8} {:>14}",
        item.id,
        item.game.display_name(),
        item.rank,
        item.server,
        price(item.price),
    )
}

pub(crate) fn donation_line(out: &mut impl Write, donation: &Donation) -> io::Result<()> {
    let reference = match &donation.details {
        DonationDetails::Card { serial, .. } => format!("serial {serial}"),
        DonationDetails::Bank { transfer_note, .. } => format!("note {transfer_note}"),
    };
    writeln!(
        out,
        "#{:<14} {:<20} {:>14}  {} {:<12} {} [{}]",
        donation.id,
        donation.donor,
        price(donation.amount),
        donation.details.channel(),
        donation.method,
        reference,
        donation.status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_grouped_by_thousands() {
        assert_eq!(price(0), "0 ₫");
        assert_eq!(price(999), "999 ₫");
        assert_eq!(price(1_000), "1.000 ₫");
        assert_eq!(price(500_000), "500.000 ₫");
        assert_eq!(price(12_345_678), "12.345.678 ₫");
    }
}
