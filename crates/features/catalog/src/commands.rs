use crate::draft::{AccountDraft, AccountPatch};
use crate::error::CatalogError;
use gshop_domain::{Account, AccountStatus, Actor, ShopState, Timestamp};
use gshop_kernel::ids::next_id;
use tracing::{debug, info};

fn require_user(actor: Option<&Actor>) -> Result<&Actor, CatalogError> {
    actor.ok_or_else(|| CatalogError::Unauthorized { message: "login required".into(), context: None })
}

fn require_admin(actor: Option<&Actor>) -> Result<&Actor, CatalogError> {
    match actor {
        Some(actor) if actor.is_admin => Ok(actor),
        Some(actor) => {
            debug!(username = %actor.username, "Admin operation refused");
            Err(CatalogError::Unauthorized {
                message: "admin privileges required".into(),
                context: None,
            })
        },
        None => require_user(None),
    }
}

fn position(state: &ShopState, id: u64) -> Result<usize, CatalogError> {
    state.accounts.iter().position(|a| a.id == id).ok_or_else(|| CatalogError::not_found(id))
}

fn create(
    state: &mut ShopState,
    draft: AccountDraft,
    status: AccountStatus,
    actor: &Actor,
    now: Timestamp,
) -> Result<u64, CatalogError> {
    let draft = draft.validated()?;
    let id = next_id(now, state.accounts.iter().map(|a| a.id));

    state.accounts.push(Account {
        id,
        game: draft.game,
        rank: draft.rank,
        server: draft.server,
        price: draft.price,
        description: draft.description,
        image: draft.image,
        status,
        created_by: actor.username.clone(),
        created_at: now,
        approved_by: None,
        approved_at: None,
        buyer: None,
        sold_at: None,
    });

    Ok(id)
}

/// Lists a new account straight into the storefront.
///
/// # Errors
/// * [`CatalogError::Unauthorized`] unless `actor` is an admin.
/// * [`CatalogError::MissingFields`] / [`CatalogError::InvalidPrice`] for a bad draft.
pub fn submit(
    state: &mut ShopState,
    draft: AccountDraft,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<u64, CatalogError> {
    let actor = require_admin(actor)?;
    let id = create(state, draft, AccountStatus::Active, actor, now)?;
    info!(account_id = id, username = %actor.username, "Account listed");
    Ok(id)
}

/// Queues an account for admin review.
///
/// # Errors
/// * [`CatalogError::Unauthorized`] when nobody is logged in.
/// * [`CatalogError::MissingFields`] / [`CatalogError::InvalidPrice`] for a bad draft.
pub fn propose(
    state: &mut ShopState,
    draft: AccountDraft,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<u64, CatalogError> {
    let actor = require_user(actor)?;
    let id = create(state, draft, AccountStatus::Pending, actor, now)?;
    info!(account_id = id, username = %actor.username, "Account proposed for review");
    Ok(id)
}

fn pending_position(state: &ShopState, id: u64) -> Result<usize, CatalogError> {
    let index = position(state, id)?;
    let status = state.accounts[index].status;
    if status != AccountStatus::Pending {
        return Err(CatalogError::InvalidState {
            message: format!("account {id} is {status}, expected pending").into(),
            context: None,
        });
    }
    Ok(index)
}

/// Moves a pending account into the storefront.
///
/// # Errors
/// `Unauthorized`, then `NotFound`, then `InvalidState` unless the account is pending.
pub fn approve<'s>(
    state: &'s mut ShopState,
    id: u64,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<&'s Account, CatalogError> {
    let actor = require_admin(actor)?;
    let index = pending_position(state, id)?;

    let account = &mut state.accounts[index];
    account.status = AccountStatus::Active;
    account.approved_by = Some(actor.username.clone());
    account.approved_at = Some(now);
    info!(account_id = id, username = %actor.username, "Account approved");

    Ok(&*account)
}

/// Drops a pending account. Returns the removed record.
///
/// # Errors
/// `Unauthorized`, then `NotFound`, then `InvalidState` unless the account is pending.
pub fn reject(
    state: &mut ShopState,
    id: u64,
    actor: Option<&Actor>,
) -> Result<Account, CatalogError> {
    let actor = require_admin(actor)?;
    let index = pending_position(state, id)?;
    let account = state.accounts.remove(index);
    info!(account_id = id, username = %actor.username, "Account rejected");
    Ok(account)
}

/// Removes an account whatever its status.
///
/// # Errors
/// `Unauthorized` for non-admins, `NotFound` for an unknown id.
pub fn delete(
    state: &mut ShopState,
    id: u64,
    actor: Option<&Actor>,
) -> Result<Account, CatalogError> {
    let actor = require_admin(actor)?;
    let index = position(state, id)?;
    let account = state.accounts.remove(index);
    info!(account_id = id, status = %account.status, username = %actor.username, "Account deleted");
    Ok(account)
}

/// Updates display fields. Status and audit fields never change here.
///
/// # Errors
/// * `Unauthorized` for non-admins, `NotFound` for an unknown id.
/// * `InvalidState` for a sold account.
/// * `MissingFields` / `InvalidPrice` when the patched fields would be invalid.
pub fn edit<'s>(
    state: &'s mut ShopState,
    id: u64,
    patch: AccountPatch,
    actor: Option<&Actor>,
) -> Result<&'s Account, CatalogError> {
    let actor = require_admin(actor)?;
    let index = position(state, id)?;

    let account = &mut state.accounts[index];
    if account.status == AccountStatus::Sold {
        return Err(CatalogError::InvalidState {
            message: format!("account {id} is already sold").into(),
            context: None,
        });
    }
    patch.check_against(account)?;
    patch.apply(account);
    info!(account_id = id, username = %actor.username, "Account edited");

    Ok(&*account)
}

/// Marks an active account as sold to `actor`.
///
/// # Errors
/// `Unauthorized` when nobody is logged in, `NotFound`, then `Unavailable` unless active.
pub fn purchase<'s>(
    state: &'s mut ShopState,
    id: u64,
    actor: Option<&Actor>,
    now: Timestamp,
) -> Result<&'s Account, CatalogError> {
    let actor = require_user(actor)?;
    let index = position(state, id)?;

    let account = &mut state.accounts[index];
    if !account.is_active() {
        return Err(CatalogError::Unavailable {
            message: format!("account {id} is {}", account.status).into(),
            context: None,
        });
    }
    mark_sold(account, &actor.username, now);
    info!(account_id = id, buyer = %actor.username, price = account.price, "Account purchased");

    Ok(&*account)
}

/// Settles a sale. Callers check availability first.
pub fn mark_sold(account: &mut Account, buyer: &str, now: Timestamp) {
    account.status = AccountStatus::Sold;
    account.buyer = Some(buyer.to_owned());
    account.sold_at = Some(now);
}
