#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Filters for listing investibles.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InvestiblesRequest {
    #[builder(into)]
    pub market_id: Option<String>,
    #[builder(into)]
    pub stage_id: Option<String>,
    #[builder(into)]
    pub search: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Creates a new investible.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateInvestibleRequest {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    /// The market to create the investible in; defaults to the caller's
    /// default market when absent.
    #[builder(into)]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub label_list: Vec<String>,
}

/// Partial update of an investible. Absent fields are left unchanged; a
/// present `label_list` replaces the existing labels wholesale.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateInvestibleRequest {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub label_list: Vec<String>,
}

/// Adds a comment, optionally as a reply to an existing one.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateCommentRequest {
    #[builder(into)]
    pub body: String,
    #[builder(into)]
    pub reply_id: Option<String>,
}

/// Moves an investible to another stage.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StageChangeRequest {
    #[builder(into)]
    pub stage_id: String,
    /// The stage the caller believes the investible is in; the platform
    /// rejects the move when it has changed underneath them.
    #[builder(into)]
    pub current_stage_id: Option<String>,
}
