use crate::error::{AuthError, AuthErrorExt};
use gshop_domain::{Actor, Session, ShopState, Timestamp, User};
use gshop_kernel::security::password::verify_password;
use tracing::{debug, info};

/// Verifies credentials and opens a session, replacing any previous one.
///
/// # Errors
/// * [`AuthError::InvalidCredentials`] for an unknown username or a wrong password.
/// * [`AuthError::Password`] if the stored hash is unreadable.
pub fn login(
    state: &mut ShopState,
    username: &str,
    password: &str,
    now: Timestamp,
) -> Result<Actor, AuthError> {
    let Some(user) = state.users.iter().find(|u| u.username == username) else {
        debug!(%username, "Login for unknown user");
        return Err(AuthError::InvalidCredentials { context: None });
    };

    if !verify_password(password, &user.password_hash).context("Verifying credentials")? {
        debug!(%username, "Login with wrong password");
        return Err(AuthError::InvalidCredentials { context: None });
    }

    let actor = Actor::from(user);
    state.session =
        Some(Session { user_id: actor.user_id, username: actor.username.clone(), started_at: now });
    info!(username = %actor.username, is_admin = actor.is_admin, "User logged in");

    Ok(actor)
}

/// Ends the session. Returns the session that was closed, if any.
pub fn logout(state: &mut ShopState) -> Option<Session> {
    let session = state.session.take();
    if let Some(session) = &session {
        info!(username = %session.username, "User logged out");
    }
    session
}

/// The user behind the session. A session pointing at a vanished user resolves to `None`.
#[must_use]
pub fn current_user(state: &ShopState) -> Option<&User> {
    state.session.as_ref().and_then(|session| state.user(session.user_id))
}

#[must_use]
pub fn current_actor(state: &ShopState) -> Option<Actor> {
    current_user(state).map(Actor::from)
}

/// True iff someone is logged in and that user is an admin.
#[must_use]
pub fn is_admin(state: &ShopState) -> bool {
    current_user(state).is_some_and(|user| user.is_admin)
}
