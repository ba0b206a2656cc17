#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the Teams service client.

pub mod common;

use httpmock::{Method::GET, Method::POST, MockServer};
use quorum_client_sdk::teams::types::request::{CreateTeamRequest, InviteRequest};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn mine_should_decode_list() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/teams/mine");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!([
            {"id": "t1", "name": "Platform", "memberCount": 5},
            {"id": "t2", "name": "Design", "memberCount": 3}
        ]));
    });

    let teams = client.teams.mine().await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].member_count, Some(5));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn create_should_post_name_and_description() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/teams").json_body(json!({
            "name": "Platform",
            "description": "Backend folks"
        }));
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({"id": "t1", "name": "Platform"}));
    });

    let request = CreateTeamRequest::builder()
        .name("Platform")
        .description("Backend folks")
        .build();
    let team = client.teams.create(&request).await?;

    assert_eq!(team.id, "t1");
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn invite_should_post_email_list() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/teams/t1/invite").json_body(json!({
            "emailList": ["ada@example.com", "grace@example.com"]
        }));
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "invited": ["ada@example.com"],
            "alreadyMembers": ["grace@example.com"]
        }));
    });

    let request = InviteRequest::builder()
        .email_list(vec![
            "ada@example.com".to_owned(),
            "grace@example.com".to_owned(),
        ])
        .build();
    let result = client.teams.invite("t1", &request).await?;

    assert_eq!(result.invited, vec!["ada@example.com".to_owned()]);
    assert_eq!(
        result.already_members,
        Some(vec!["grace@example.com".to_owned()])
    );
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn bind_should_post_without_body() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/teams/t1/bind/m1");
        then.status(StatusCode::OK)
            .header("content-type", "application/json")
            .json_body(json!({
            "teamId": "t1",
            "marketId": "m1",
            "sharedQuantity": 500
        }));
    });

    let binding = client.teams.bind("t1", "m1").await?;

    assert_eq!(binding.team_id, Some("t1".to_owned()));
    assert_eq!(binding.shared_quantity, Some(500));
    mock.assert();

    Ok(())
}
