//! Contacts CRUD, owner scoping, search, pagination, and the public
//! sales-lead intake.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::{create_contact, register_user, send, test_app, unique_email};

#[tokio::test]
async fn duplicate_email_is_per_owner() {
    let app = test_app().await;
    let token_a = register_user(&app, &unique_email("owner-a")).await;
    let token_b = register_user(&app, &unique_email("owner-b")).await;
    let contact_email = unique_email("bob");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(&token_a),
        Some(json!({ "name": "Bob", "email": contact_email.to_uppercase() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Stored normalized
    assert_eq!(body["contact"]["email"], json!(contact_email));

    // Same owner, same email: duplicate
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(&token_a),
        Some(json!({ "name": "Bob Again", "email": contact_email })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Contact with this email already exists"));

    // Different owner, same email: fine
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(&token_b),
        Some(json!({ "name": "Bob", "email": contact_email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_requires_name_and_valid_email() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("val")).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(&token),
        Some(json!({ "name": "No Email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Name and email are required"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(&token),
        Some(json!({ "name": "Bad Email", "email": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid email format"));
}

#[tokio::test]
async fn search_and_pagination() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("search")).await;
    let marker = format!("marker-{}", Uuid::new_v4().simple());

    for i in 0..3 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/contacts",
            Some(&token),
            Some(json!({
                "name": format!("Contact {i}"),
                "email": unique_email("c"),
                "company": marker,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Case-insensitive match on company, first page of two
    let path = format!(
        "/api/contacts?search={}&limit=2&offset=0",
        marker.to_uppercase()
    );
    let (status, body) = send(&app, Method::GET, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contacts"].as_array().expect("contacts").len(), 2);
    assert_eq!(body["pagination"]["total"], json!(3));
    assert_eq!(body["pagination"]["hasMore"], json!(true));

    // Second page
    let path = format!("/api/contacts?search={marker}&limit=2&offset=2");
    let (status, body) = send(&app, Method::GET, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contacts"].as_array().expect("contacts").len(), 1);
    assert_eq!(body["pagination"]["hasMore"], json!(false));
}

#[tokio::test]
async fn updates_and_deletes_are_owner_scoped() {
    let app = test_app().await;
    let token_a = register_user(&app, &unique_email("scope-a")).await;
    let token_b = register_user(&app, &unique_email("scope-b")).await;

    let contact_id = create_contact(&app, &token_a, "Carol", &unique_email("carol")).await;
    let path = format!("/api/contacts/{contact_id}");

    // Another user's token sees a 404, not a 403
    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token_b),
        Some(json!({ "name": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Contact not found"));

    let (status, _) = send(&app, Method::DELETE, &path, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The owner can update
    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token_a),
        Some(json!({ "name": "Caroline", "notes": "met at the conference" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contact"]["name"], json!("Caroline"));
    assert_eq!(body["contact"]["notes"], json!("met at the conference"));

    // And delete, exactly once
    let (status, _) = send(&app, Method::DELETE, &path, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &path, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rejects_short_name_and_bad_email() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("upd")).await;
    let contact_id = create_contact(&app, &token, "Dave", &unique_email("dave")).await;
    let path = format!("/api/contacts/{contact_id}");

    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token),
        Some(json!({ "name": "D" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Name must be at least 2 characters long"));

    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(&token),
        Some(json!({ "email": "broken" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid email format"));
}

#[tokio::test]
async fn sales_lead_intake_is_public() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact-sales",
        None,
        Some(json!({
            "name": "Lead Person",
            "email": unique_email("lead"),
            "company": "BigCorp",
            "message": "We need contact syncing",
            "teamSize": "50+",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["leadId"].as_str().expect("leadId").is_empty());

    // Company is required for leads
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact-sales",
        None,
        Some(json!({ "name": "No Company", "email": unique_email("lead") })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Name, email, and company are required"));
}

#[tokio::test]
async fn leads_never_appear_in_user_listings() {
    let app = test_app().await;
    let token = register_user(&app, &unique_email("no-leads")).await;
    let marker = format!("leadmark-{}", Uuid::new_v4().simple());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contact-sales",
        None,
        Some(json!({ "name": "Lead", "email": unique_email("l"), "company": marker })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let path = format!("/api/contacts?search={marker}");
    let (status, body) = send(&app, Method::GET, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], json!(0));
}
