use crate::error::{AuthError, AuthErrorExt};
use gshop_domain::{ShopState, Timestamp, User};
use gshop_kernel::ids::next_id;
use gshop_kernel::security::password::hash_password;
use tracing::info;

/// Sign-up form.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Creates a non-admin user.
///
/// Checks run in order: blank fields, password confirmation, username uniqueness, email
/// uniqueness. Uniqueness is an exact, case-sensitive match.
///
/// # Errors
/// * [`AuthError::MissingFields`] if username, email or password is blank.
/// * [`AuthError::PasswordMismatch`] if the confirmation differs.
/// * [`AuthError::DuplicateUsername`] / [`AuthError::DuplicateEmail`] on collisions.
/// * [`AuthError::Password`] if hashing fails.
pub fn register<'s>(
    state: &'s mut ShopState,
    form: &Registration<'_>,
    now: Timestamp,
) -> Result<&'s User, AuthError> {
    let fields = [("username", form.username), ("email", form.email), ("password", form.password)];
    let blank: Vec<&str> = fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
    if !blank.is_empty() {
        return Err(AuthError::MissingFields { message: blank.join(", ").into(), context: None });
    }

    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch { context: None });
    }

    if state.users.iter().any(|u| u.username == form.username) {
        return Err(AuthError::DuplicateUsername {
            message: form.username.to_owned().into(),
            context: None,
        });
    }

    if state.users.iter().any(|u| u.email == form.email) {
        return Err(AuthError::DuplicateEmail {
            message: form.email.to_owned().into(),
            context: None,
        });
    }

    let password_hash = hash_password(form.password).context("Registering user")?;
    let id = next_id(now, state.users.iter().map(|u| u.id));

    state.users.push(User {
        id,
        username: form.username.to_owned(),
        email: form.email.to_owned(),
        password_hash,
        is_admin: false,
        created_at: now,
    });
    info!(username = %form.username, user_id = id, "User registered");

    Ok(&state.users[state.users.len() - 1])
}
