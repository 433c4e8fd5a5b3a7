use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// A registered shop user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// PHC-formatted salted hash. The plaintext is never stored.
    pub password_hash: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// The persisted login of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: u64,
    pub username: String,
    pub started_at: Timestamp,
}

/// Who is performing an operation, resolved from the session against the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub user_id: u64,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self { user_id: user.id, username: user.username.clone(), is_admin: user.is_admin }
    }
}
