mod common;

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use model::user::Badge;
use model::Snowflake;
use searcher::{Client, Config, Error, UserProfile};
use serde_json::json;

const TOKEN: &str = "test-token";

async fn get_user(Path(id): Path<String>, headers: HeaderMap) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(&format!("Bearer {}", TOKEN)[..]);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "401: Unauthorized", "code": 0})))
            .into_response();
    }

    let has_user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("DiscordBot ("));
    if !has_user_agent {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match id.as_str() {
        "424606447867789312" => Json(json!({
            "id": "424606447867789312",
            "username": "Searcher",
            "avatar": "3f2290152cc9eaef437db2e365cce095",
            "discriminator": "0001",
            "public_flags": 64,
            "banner": null,
        }))
        .into_response(),
        "80351110224678912" => Json(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "avatar": "a_8342729096ea3675442027381ff50dfe",
            "discriminator": "1337",
            "public_flags": 131141,
            "premium_type": 2,
        }))
        .into_response(),
        "222079895583457280" => Json(json!({
            "id": "222079895583457280",
            "username": "nobody",
            "avatar": null,
            "discriminator": "0003",
        }))
        .into_response(),
        "1017466185394061312" => Json(json!({
            "id": "1017466185394061312",
            "username": "migrated",
            "avatar": null,
            "discriminator": "0",
            "public_flags": 0,
        }))
        .into_response(),
        "500" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "418" => "not json at all".into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Unknown User", "code": 10013})),
        )
            .into_response(),
    }
}

async fn client(token: &str) -> Client {
    let base = common::spawn(Router::new().route("/users/:id", get(get_user))).await;

    let mut config = Config::new(token);
    config.api_base = base;
    Client::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_known_user() {
    let client = client(TOKEN).await;
    let id = Snowflake(424606447867789312);

    let profile = client.fetch_user_profile(id).await.unwrap();

    assert_eq!(
        profile,
        UserProfile {
            id,
            username: "Searcher".to_string(),
            discriminator: "0001".parse().unwrap(),
            avatar_url: "https://cdn.discordapp.com/avatars/424606447867789312/3f2290152cc9eaef437db2e365cce095.webp?size=4096".to_string(),
            badges: vec![Badge::HouseBravery],
        }
    );
}

#[tokio::test]
async fn test_fetch_animated_user() {
    let client = client(TOKEN).await;

    let profile = client
        .fetch_user_profile(Snowflake(80351110224678912))
        .await
        .unwrap();

    assert_eq!(
        profile.avatar_url,
        "https://cdn.discordapp.com/avatars/80351110224678912/a_8342729096ea3675442027381ff50dfe.gif?size=4096"
    );
    assert_eq!(
        profile.badges,
        vec![
            Badge::DiscordEmployee,
            Badge::HypeSquadEvents,
            Badge::HouseBravery,
            Badge::EarlyVerifiedBotDeveloper,
        ]
    );
    assert_eq!(profile.tag(), "Nelly#1337");
}

#[tokio::test]
async fn test_fetch_user_without_avatar() {
    let client = client(TOKEN).await;

    let profile = client
        .fetch_user_profile(Snowflake(222079895583457280))
        .await
        .unwrap();

    assert_eq!(
        profile.avatar_url,
        "https://cdn.discordapp.com/embed/avatars/3.png?size=4096"
    );
    assert!(profile.badges.is_empty());
}

#[tokio::test]
async fn test_fetch_migrated_user() {
    let client = client(TOKEN).await;

    let profile = client
        .fetch_user_profile(Snowflake(1017466185394061312))
        .await
        .unwrap();

    assert_eq!(profile.discriminator.as_str(), "0");
    assert_eq!(profile.tag(), "migrated#0");
    assert_eq!(
        serde_json::to_value(&profile).unwrap()["discriminator"],
        json!("0")
    );
    assert_eq!(
        profile.avatar_url,
        "https://cdn.discordapp.com/embed/avatars/0.png?size=4096"
    );
}

#[tokio::test]
async fn test_unknown_user() {
    let client = client(TOKEN).await;

    let res = client.fetch_user_profile(Snowflake(1)).await;
    assert!(matches!(res, Err(Error::UserNotFound(Snowflake(1)))));
}

#[tokio::test]
async fn test_bad_token() {
    let client = client("wrong").await;

    let res = client.fetch_user_profile(Snowflake(424606447867789312)).await;
    assert!(matches!(res, Err(Error::Unauthorized)));
}

#[tokio::test]
async fn test_server_error() {
    let client = client(TOKEN).await;

    match client.fetch_user_profile(Snowflake(500)).await {
        Err(Error::RemoteError(status)) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let client = client(TOKEN).await;

    let res = client.fetch_user_profile(Snowflake(418)).await;
    assert!(matches!(res, Err(Error::DecodeError(_))));
}

#[tokio::test]
async fn test_transport_error() {
    let mut config = Config::new(TOKEN);
    // Nothing listens on the discard port
    config.api_base = "http://127.0.0.1:9".to_string();
    let client = Client::new(config).unwrap();

    let res = client.fetch_user_profile(Snowflake(1)).await;
    assert!(matches!(res, Err(Error::TransportError(_))));
}
