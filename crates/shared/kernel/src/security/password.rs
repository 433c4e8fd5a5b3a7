//! Salted credential hashing.
//!
//! Passwords are stored as argon2id PHC strings (`$argon2id$v=19$...`) carrying their own salt
//! and parameters, so verification needs nothing but the stored string.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::borrow::Cow;

const SALT_LEN: usize = 16;

#[gshop_derive::shop_error]
pub enum PasswordError {
    #[kind(Internal)]
    #[error("Entropy source failure{}: {source}", format_context(.context))]
    Entropy { source: getrandom::Error, context: Option<Cow<'static, str>> },

    #[kind(Internal)]
    #[error("Password hashing failure{}: {source}", format_context(.context))]
    Hash { source: password_hash::Error, context: Option<Cow<'static, str>> },
}

/// Hashes `password` with a fresh random salt.
///
/// # Errors
/// Returns [`PasswordError::Entropy`] if the OS refuses to provide randomness and
/// [`PasswordError::Hash`] if argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::fill(&mut salt).context("Generating password salt")?;
    let salt = SaltString::encode_b64(&salt).context("Encoding password salt")?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .context("Hashing password")?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string.
///
/// A wrong password is `Ok(false)`; only a malformed hash or an argon2 failure is an error.
///
/// # Errors
/// Returns [`PasswordError::Hash`] when `stored` is not a valid PHC string.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).context("Parsing stored password hash")?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordError::Hash {
            source: err,
            context: Some("Verifying password".into()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verify() {
        let first = hash_password("admin123").unwrap();
        let second = hash_password("admin123").unwrap();

        assert_ne!(first, second, "two hashes of one password must differ by salt");
        assert!(first.starts_with("$argon2id$"));
        assert!(verify_password("admin123", &first).unwrap());
        assert!(verify_password("admin123", &second).unwrap());
        assert!(!verify_password("admin124", &first).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify_password("x", "plaintext").unwrap_err();
        assert_eq!(err.kind(), gshop_domain::ErrorKind::Internal);
    }
}
