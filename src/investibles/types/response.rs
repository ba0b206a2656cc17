#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An idea users can invest in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Investible {
    pub id: String,
    pub market_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub stage_id: Option<String>,
    pub label_list: Option<Vec<String>>,
    /// Total idea shares currently invested across all users.
    pub quantity: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A comment on an investible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Comment {
    pub id: String,
    pub investible_id: Option<String>,
    pub user_id: Option<String>,
    pub body: Option<String>,
    pub reply_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The caller's follow state after a follow or unfollow call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FollowState {
    pub investible_id: Option<String>,
    pub following: bool,
}
