use crate::args::CartAction;
use crate::output;
use anyhow::Result;
use gshop::Shop;
use gshop::features::cart::ClearOutcome;
use std::io::Write;

pub(crate) async fn handle(shop: &mut Shop, action: CartAction, out: &mut impl Write) -> Result<()> {
    match action {
        CartAction::Add { id } => {
            let item = shop.add_to_cart(id).await?;
            writeln!(out, "Added #{} to the cart ({} items)", item.id, shop.cart_count())?;
        },
        CartAction::Remove { id } => {
            if shop.remove_from_cart(id).await? {
                writeln!(out, "Removed #{id}")?;
            } else {
                writeln!(out, "#{id} was not in the cart")?;
            }
        },
        CartAction::Clear => match shop.clear_cart().await? {
            ClearOutcome::Cleared(n) => writeln!(out, "Removed {n} items")?,
            ClearOutcome::AlreadyEmpty => writeln!(out, "warning: the cart is already empty")?,
        },
        CartAction::Show => {
            if shop.cart().is_empty() {
                writeln!(out, "The cart is empty")?;
                return Ok(());
            }
            for item in shop.cart() {
                output::cart_line(out, item)?;
            }
            writeln!(out, "{} items, total {}", shop.cart_count(), output::price(shop.cart_total()))?;
        },
        CartAction::Checkout => {
            let receipt = shop.checkout().await?;
            writeln!(out, "Bought {} accounts for {}", receipt.items(), output::price(receipt.total))?;
            if !receipt.skipped.is_empty() {
                let skipped: Vec<String> = receipt.skipped.iter().map(|id| format!("#{id}")).collect();
                writeln!(out, "No longer available: {}", skipped.join(", "))?;
            }
        },
    }
    Ok(())
}
