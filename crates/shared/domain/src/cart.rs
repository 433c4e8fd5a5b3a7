use crate::account::Account;
use crate::game::GameCode;
use serde::{Deserialize, Serialize};

/// Display snapshot of an account, frozen when it was put in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub game: GameCode,
    pub rank: String,
    pub server: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl From<&Account> for CartItem {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            game: account.game,
            rank: account.rank.clone(),
            server: account.server.clone(),
            price: account.price,
            image: account.image.clone(),
            description: account.description.clone(),
        }
    }
}
