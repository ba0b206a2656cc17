#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the Users service client.

pub mod common;

use httpmock::{Method::GET, Method::PATCH, Method::POST, MockServer};
use quorum_client_sdk::users::types::request::UpdateUserRequest;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn current_should_decode_profile() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/current");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "id": "u7",
            "name": "Ada",
            "email": "ada@example.com",
            "ideaShares": 100,
            "createdAt": "2024-01-15T10:30:00Z"
        }));
    });

    let user = client.users.current().await?;

    assert_eq!(user.id, "u7");
    assert_eq!(user.name, Some("Ada".to_owned()));
    assert_eq!(user.idea_shares, Some(100));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn update_should_patch_profile() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/users/current")
            .json_body(json!({"name": "Ada L."}));
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({"id": "u7", "name": "Ada L."}));
    });

    let request = UpdateUserRequest::builder().name("Ada L.").build();
    let user = client.users.update(&request).await?;

    assert_eq!(user.name, Some("Ada L.".to_owned()));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn grant_should_post_quantity() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/u9/grant")
            .json_body(json!({"quantity": 25}));
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "userId": "u9",
            "quantity": 25,
            "balance": 125
        }));
    });

    let grant = client.users.grant("u9", 25).await?;

    assert_eq!(grant.user_id, "u9");
    assert_eq!(grant.balance, Some(125));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn poke_should_post_text() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/u9/poke")
            .json_body(json!({"text": "please vote"}));
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({"userId": "u9", "text": "please vote"}));
    });

    let poke = client.users.poke("u9", "please vote").await?;

    assert_eq!(poke.user_id, "u9");
    assert_eq!(poke.text, Some("please vote".to_owned()));
    mock.assert();

    Ok(())
}
