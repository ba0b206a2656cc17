#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The change-detection version vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct VersionsResponse {
    pub global_version: Option<String>,
    #[serde(default)]
    pub signatures: Vec<MarketSignature>,
}

/// One market's entry in the version vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketSignature {
    pub market_id: String,
    pub version: Option<i64>,
}

/// Aggregated view of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketSummary {
    pub market_id: String,
    pub name: Option<String>,
    pub active_investibles: Option<i32>,
    pub total_quantity_invested: Option<i64>,
    pub updated_at: Option<DateTime<Utc>>,
}
