//! The demo sync, inbox listing and filters, flag toggles, and the
//! dashboard counts.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{register_user, send, test_app, unique_email};

/// Sync and return the listed emails plus the list response body.
async fn sync_and_list(app: &axum::Router, token: &str) -> serde_json::Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/email/sync",
        Some(token),
        Some(json!({ "provider": "gmail" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sync failed: {body}");
    assert_eq!(body["synced"], json!(3));

    let (status, body) = send(app, Method::GET, "/api/emails", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn sync_populates_the_inbox() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("sync")).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/email/sync",
        Some(&token),
        Some(json!({ "provider": "outlook" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["synced"], json!(3));

    let previews = body["emails"].as_array().expect("previews");
    assert_eq!(previews.len(), 3);
    for preview in previews {
        assert!(preview["body"].as_str().expect("body").ends_with("..."));
        assert!(preview["id"].as_str().expect("id").starts_with("demo-"));
    }

    // Everything lands unread, newest first
    let (status, body) = send(&app, Method::GET, "/api/emails", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let emails = body["emails"].as_array().expect("emails");
    assert_eq!(emails.len(), 3);
    for email in emails {
        assert_eq!(email["isRead"], json!(false));
    }
    let times: Vec<&str> = emails
        .iter()
        .map(|e| e["receivedAt"].as_str().expect("receivedAt"))
        .collect();
    assert!(times[0] >= times[1] && times[1] >= times[2]);

    // The user is now flagged as synced
    let (status, body) = send(&app, Method::GET, "/api/auth/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["isEmailSynced"], json!(true));
    assert!(body["user"]["lastEmailSync"].is_string());
}

#[tokio::test]
async fn repeated_sync_replaces_the_batch() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("resync")).await;

    sync_and_list(&app, &token).await;
    let body = sync_and_list(&app, &token).await;
    assert_eq!(body["pagination"]["total"], json!(3));
}

#[tokio::test]
async fn list_filters_unread_and_important() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("filters")).await;
    let body = sync_and_list(&app, &token).await;
    let first_id = body["emails"][0]["id"].as_str().expect("id").to_string();

    // The demo batch has two important messages
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/emails?important=true",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], json!(2));
    for email in body["emails"].as_array().expect("emails") {
        assert_eq!(email["isImportant"], json!(true));
    }

    // Read one; the unread filter drops to two
    let path = format!("/api/emails/{first_id}/read");
    let (status, _) = send(&app, Method::PUT, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/emails?unread=true",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], json!(2));
}

#[tokio::test]
async fn mark_read_is_idempotent_and_scoped() {
    let app = test_app().await;
    let token_a = register_user(&app, &unique_email("read-a")).await;
    let token_b = register_user(&app, &unique_email("read-b")).await;

    let body = sync_and_list(&app, &token_a).await;
    let id = body["emails"][0]["id"].as_str().expect("id").to_string();
    let path = format!("/api/emails/{id}/read");

    let (status, body) = send(&app, Method::PUT, &path, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Email marked as read"));

    // Second call succeeds and changes nothing
    let (status, _) = send(&app, Method::PUT, &path, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);

    // Someone else's inbox: 404
    let (status, body) = send(&app, Method::PUT, &path, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Email not found"));
}

#[tokio::test]
async fn mark_important_toggles_both_ways() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("imp")).await;
    let body = sync_and_list(&app, &token).await;
    let id = body["emails"][0]["id"].as_str().expect("id").to_string();
    let path = format!("/api/emails/{id}/important");

    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token),
        Some(json!({ "important": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Email marked as important"));
    assert_eq!(body["email"]["isImportant"], json!(true));

    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token),
        Some(json!({ "important": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Email marked as not important"));
    assert_eq!(body["email"]["isImportant"], json!(false));
}

#[tokio::test]
async fn dashboard_counts_are_owner_scoped() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("stats")).await;

    for i in 0..2 {
        common::create_contact(&app, &token, &format!("Stat {i}"), &unique_email("s")).await;
    }
    let body = sync_and_list(&app, &token).await;
    let id = body["emails"][0]["id"].as_str().expect("id").to_string();
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/emails/{id}/read"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, stats) = send(&app, Method::GET, "/api/dashboard/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["contacts"], json!(2));
    assert_eq!(stats["emails"], json!(3));
    assert_eq!(stats["unreadEmails"], json!(2));
    assert_eq!(stats["importantEmails"], json!(2));

    // Demo messages are stamped up to an hour in the past, so the count
    // for the current calendar day depends on the wall clock.
    let today = stats["todayEmails"].as_i64().expect("todayEmails");
    assert!((1..=3).contains(&today));

    // A fresh user sees zeroes
    let other = register_user(&app, &unique_email("fresh")).await;
    let (status, stats) = send(&app, Method::GET, "/api/dashboard/stats", Some(&other), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["contacts"], json!(0));
    assert_eq!(stats["emails"], json!(0));
}
