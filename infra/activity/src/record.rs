use gshop_domain::{GameCode, Timestamp};
use serde::{Deserialize, Serialize};

/// Something a user did that is worth journaling.
///
/// Serialized with a `type` tag next to the variant's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Activity {
    Register { email: String },
    Login { is_admin: bool },
    Logout,
    Purchase { account_id: u64, game: GameCode, rank: String, amount: u64 },
    Checkout { items: usize, amount: u64 },
    Donation { amount: u64, method: String },
}

impl Activity {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::Purchase { .. } => "purchase",
            Self::Checkout { .. } => "checkout",
            Self::Donation { .. } => "donation",
        }
    }
}

/// One journal entry: `{ "type", "username", "timestamp", ...extra }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(flatten)]
    pub activity: Activity,
    pub username: String,
    pub timestamp: Timestamp,
}

impl ActivityRecord {
    #[must_use]
    pub fn new(username: impl Into<String>, activity: Activity) -> Self {
        Self { activity, username: username.into(), timestamp: chrono::Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_serialize_flat_with_type_tag() {
        let record = ActivityRecord::new(
            "alice",
            Activity::Purchase { account_id: 7, game: GameCode::Lol, rank: "Gold".to_owned(), amount: 500 },
        );

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], json!("purchase"));
        assert_eq!(value["username"], json!("alice"));
        assert_eq!(value["accountId"], json!(7));
        assert_eq!(value["game"], json!("lol"));
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn unit_activity_carries_only_the_envelope() {
        let value = serde_json::to_value(ActivityRecord::new("bob", Activity::Logout)).unwrap();

        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["timestamp", "type", "username"]);
    }

    #[test]
    fn login_flag_is_camel_case() {
        let value = serde_json::to_value(Activity::Login { is_admin: true }).unwrap();
        assert_eq!(value, json!({ "type": "login", "isAdmin": true }));
    }
}
