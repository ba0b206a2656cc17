#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decision market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Market {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Lifecycle stage of the market itself, e.g. `Active` or `Inactive`.
    pub market_stage: Option<String>,
    pub created_by: Option<String>,
    pub expiration_minutes: Option<i64>,
    pub active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A stage in a market's investible workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Stage {
    pub id: String,
    pub name: Option<String>,
    pub allows_investment: Option<bool>,
    pub appears_in_market_summary: Option<bool>,
}

/// One user's position in one investible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Investment {
    pub id: String,
    pub market_id: Option<String>,
    pub investible_id: Option<String>,
    pub user_id: Option<String>,
    pub quantity: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
