#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Filters for listing markets.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketsRequest {
    pub active: Option<bool>,
    #[builder(into)]
    pub search: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Creates a new decision market.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateMarketRequest {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    /// Minutes until the market expires and stops accepting investments.
    pub expiration_minutes: Option<i64>,
    /// Idea shares handed to each user on first login to this market.
    pub initial_quantity: Option<i64>,
}

/// Partial update of an existing market. Absent fields are left unchanged.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateMarketRequest {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    pub expiration_minutes: Option<i64>,
}

/// Places or adjusts an investment in an investible.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InvestRequest {
    #[builder(into)]
    pub investible_id: String,
    /// The target position in idea shares; the platform computes the delta
    /// from the caller's current position.
    pub quantity: i64,
}

/// Filters for listing investments in a market.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InvestmentsRequest {
    #[builder(into)]
    pub user_id: Option<String>,
    #[builder(into)]
    pub investible_id: Option<String>,
}
