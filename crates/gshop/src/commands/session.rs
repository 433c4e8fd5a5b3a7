use crate::Shop;
use crate::error::ShopError;
use chrono::Utc;
use gshop_activity::Activity;
use gshop_auth::Registration;
use gshop_domain::{Actor, User};

impl Shop {
    /// Creates a regular user. Does not log them in.
    ///
    /// # Errors
    /// Any [`gshop_auth::AuthError`] validation failure, or a persistence error.
    pub async fn register(&mut self, form: &Registration<'_>) -> Result<User, ShopError> {
        let user = gshop_auth::register(&mut self.state, form, Utc::now())?.clone();
        let activity = Activity::Register { email: user.email.clone() };
        self.commit(Some((user.username.clone(), activity))).await?;
        Ok(user)
    }

    /// Opens a session, replacing any previous one.
    ///
    /// # Errors
    /// [`gshop_auth::AuthError::InvalidCredentials`] for a bad username or password.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Actor, ShopError> {
        let actor = gshop_auth::login(&mut self.state, username, password, Utc::now())?;
        let activity = Activity::Login { is_admin: actor.is_admin };
        self.commit(Some((actor.username.clone(), activity))).await?;
        Ok(actor)
    }

    /// Ends the session. Returns whether someone was logged in.
    ///
    /// # Errors
    /// Only persistence failures.
    pub async fn logout(&mut self) -> Result<bool, ShopError> {
        let Some(session) = gshop_auth::logout(&mut self.state) else {
            return Ok(false);
        };
        self.commit(Some((session.username, Activity::Logout))).await?;
        Ok(true)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        gshop_auth::current_user(&self.state)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        gshop_auth::is_admin(&self.state)
    }
}
