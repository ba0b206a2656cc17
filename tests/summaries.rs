#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the Summaries service client.

pub mod common;

use httpmock::{Method::GET, MockServer};
use quorum_client_sdk::summaries::types::request::VersionsRequest;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn versions_should_join_market_ids_with_commas() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/versions")
            .query_param("marketIds", "m1,m2");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "globalVersion": "v42",
            "signatures": [
                {"marketId": "m1", "version": 17},
                {"marketId": "m2", "version": 4}
            ]
        }));
    });

    let request = VersionsRequest::builder()
        .market_ids(vec!["m1".to_owned(), "m2".to_owned()])
        .build();
    let versions = client.summaries.versions(&request).await?;

    assert_eq!(versions.global_version, Some("v42".to_owned()));
    assert_eq!(versions.signatures.len(), 2);
    assert_eq!(versions.signatures[0].version, Some(17));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn versions_with_no_filter_should_omit_the_query() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/versions");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({"globalVersion": "v42", "signatures": []}));
    });

    let versions = client
        .summaries
        .versions(&VersionsRequest::default())
        .await?;

    assert!(versions.signatures.is_empty(), "no signatures expected");
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn market_summary_should_decode_rollup() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets/m1");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "marketId": "m1",
            "name": "Roadmap priorities",
            "activeInvestibles": 12,
            "totalQuantityInvested": 1900,
            "updatedAt": "2024-06-20T14:45:00Z"
        }));
    });

    let summary = client.summaries.market_summary("m1").await?;

    assert_eq!(summary.market_id, "m1");
    assert_eq!(summary.active_investibles, Some(12));
    assert_eq!(summary.total_quantity_invested, Some(1900));
    mock.assert();

    Ok(())
}
