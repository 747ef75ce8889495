//! API integration tests
//!
//! These run against a live server on port 8080.

use reqwest::{header::LOCATION, Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Suffix keeping natural keys unique across runs against the same server
fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn services(path: &str) -> String {
    format!("{}/services/{}", BASE_URL, path)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_get_and_delete_media() {
    let client = Client::new();
    let name = unique("media");

    // Create media
    let response = client
        .post(services("medias/"))
        .json(&json!({
            "name": name,
            "releaseDate": "2018-03-01",
            "supports": ["dvd"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(LOCATION)
        .expect("No Location header")
        .to_str()
        .expect("Location is not ASCII")
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    let media_id = body["id"].as_i64().expect("No media ID");
    assert!(location.ends_with(&format!("/services/medias/{}", media_id)));

    // Same name and release date again
    let response = client
        .post(services("medias/"))
        .json(&json!({ "name": name, "releaseDate": "2018-03-01" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Get media
    let response = client
        .get(services(&format!("medias/{}", media_id)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, body);

    // Delete media
    let response = client
        .delete(services(&format!("medias/{}", media_id)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(services(&format!("medias/{}", media_id)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_stock_increment_and_decrement() {
    let client = Client::new();

    let response = client
        .post(services("medias/"))
        .json(&json!({ "name": unique("stocked") }))
        .send()
        .await
        .expect("Failed to send request");
    let media: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .post(services("stocks/"))
        .json(&json!({
            "mediaId": media["id"],
            "initialStock": 1,
            "currentStock": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let stock: Value = response.json().await.expect("Failed to parse response");
    let stock_id = stock["id"].as_i64().expect("No stock ID");

    let response = client
        .put(services(&format!("stocks/{}/increment", stock_id)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client
        .put(services(&format!("stocks/{}/decrement", stock_id)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["currentStock"], 0);

    // Cleanup
    let _ = client
        .delete(services(&format!("stocks/{}", stock_id)))
        .send()
        .await;
    let _ = client
        .delete(services(&format!("medias/{}", media["id"])))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_register_and_authenticate() {
    let client = Client::new();
    let email = format!("{}@medialibs.fr", unique("reader"));

    let response = client
        .post(services("auth/register"))
        .json(&json!({ "email": email, "password": "s3cret" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let user: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(user["role"], "guest");
    assert!(user.get("password").is_none());

    let response = client
        .post(services("auth/authenticate"))
        .json(&json!({ "email": email, "password": "s3cret" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(services("auth/authenticate"))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Cleanup
    let _ = client
        .delete(services(&format!("users/{}", user["id"])))
        .send()
        .await;
}
