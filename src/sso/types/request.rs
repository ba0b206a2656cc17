#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Exchanges an identity token for a platform access token, optionally
/// scoped to one market.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LoginRequest {
    #[builder(into)]
    pub id_token: String,
    #[builder(into)]
    pub market_id: Option<String>,
    /// Credits the referring user when this login creates a new account.
    #[builder(into)]
    pub referring_user_id: Option<String>,
}

/// Lists the markets an identity may enter.
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AvailableMarketsRequest {
    #[builder(into)]
    pub id_token: String,
}
