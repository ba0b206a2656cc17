#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A freshly issued platform access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    /// Seconds until the access token expires.
    pub expires_in: Option<i64>,
    pub user_id: Option<String>,
    pub market_id: Option<String>,
}

/// A market an identity is entitled to enter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AvailableMarket {
    pub market_id: String,
    pub name: Option<String>,
    pub role: Option<String>,
}
