use crate::args::{AccountAction, AccountFields};
use crate::output;
use anyhow::Result;
use gshop::Shop;
use gshop::features::catalog::{AccountDraft, AccountFilter, AccountPatch};
use std::io::Write;

impl From<AccountFields> for AccountDraft {
    fn from(fields: AccountFields) -> Self {
        Self {
            game: fields.game,
            rank: fields.rank,
            server: fields.server,
            price: fields.price,
            description: fields.description,
            image: fields.image,
        }
    }
}

pub(crate) async fn handle(shop: &mut Shop, action: AccountAction, out: &mut impl Write) -> Result<()> {
    match action {
        AccountAction::List { all: true, .. } => {
            for account in shop.all_accounts() {
                output::account_line(out, account)?;
            }
        },
        AccountAction::List { game, price, all: false } => {
            let filter = AccountFilter::parse(game.as_deref(), price.as_deref())
                .map_err(gshop::ShopError::from)?;
            let accounts = shop.list_accounts(&filter);
            if accounts.is_empty() {
                writeln!(out, "No accounts match")?;
            }
            for account in accounts {
                output::account_line(out, account)?;
            }
        },
        AccountAction::Show { id } => output::account_details(out, shop.account(id)?)?,
        AccountAction::Add(fields) => {
            let id = shop.submit_account(fields.into()).await?;
            writeln!(out, "Listed account #{id}")?;
        },
        AccountAction::Propose(fields) => {
            let id = shop.propose_account(fields.into()).await?;
            writeln!(out, "Account #{id} submitted for review")?;
        },
        AccountAction::Approve { id } => {
            shop.approve_account(id).await?;
            writeln!(out, "Account #{id} is now for sale")?;
        },
        AccountAction::Reject { id } => {
            shop.reject_account(id).await?;
            writeln!(out, "Account #{id} rejected")?;
        },
        AccountAction::Delete { id } => {
            shop.delete_account(id).await?;
            writeln!(out, "Account #{id} deleted")?;
        },
        AccountAction::Edit { id, game, rank, server, price, description, image, clear_image } => {
            let image = if clear_image { Some(String::new()) } else { image };
            let patch = AccountPatch { game, rank, server, price, description, image };
            if patch.is_empty() {
                writeln!(out, "Nothing to change")?;
                return Ok(());
            }
            let account = shop.edit_account(id, patch).await?;
            output::account_details(out, &account)?;
        },
        AccountAction::Buy { id } => {
            let account = shop.purchase(id).await?;
            writeln!(
                out,
                "Bought {} {} for {}",
                account.game.display_name(),
                account.rank,
                output::price(account.price)
            )?;
        },
        AccountAction::Pending => {
            let pending = shop.pending_accounts();
            if pending.is_empty() {
                writeln!(out, "No accounts awaiting review")?;
            }
            for account in pending {
                output::account_line(out, account)?;
                writeln!(out, "{:>16} proposed by {}", "", account.created_by)?;
            }
        },
    }
    Ok(())
}
