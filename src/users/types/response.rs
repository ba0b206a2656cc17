#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct User {
    pub id: String,
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub default_market_id: Option<String>,
    /// Idea shares available to invest across this user's markets.
    pub idea_shares: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of granting idea shares to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Grant {
    pub user_id: String,
    pub quantity: i64,
    /// The grantee's idea-share balance after the grant.
    pub balance: Option<i64>,
}

/// Acknowledgement of a poke notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Poke {
    pub user_id: String,
    pub text: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
