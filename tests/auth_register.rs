mod common;
mod support;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use backend::extract_subject;
use common::assert_problem_details_structure;
use serde_json::json;
use support::{create_test_app, test_security, test_state};

#[actix_web::test]
async fn register_returns_token_and_welcome_message() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "Ann@X.com",
            "password": "secret1"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Account created successfully! Welcome to Property Pulse."
    );

    // The token's subject is the normalized form of the submitted email
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());
    assert_eq!(
        extract_subject(token, &test_security()).expect("token should decode"),
        "ann@x.com"
    );
}

#[actix_web::test]
async fn register_rejects_duplicate_email_case_variants() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    let first = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "Ann@X.com",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, first).await;
    assert_eq!(resp.status().as_u16(), 200);

    // Same address, different casing
    let second = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "Bob",
            "lastName": "Lee",
            "email": "ann@X.COM",
            "password": "secret2"
        }))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_problem_details_structure(
        resp,
        409,
        "DUPLICATE_EMAIL",
        "An account with this email already exists",
    )
    .await;
}

#[actix_web::test]
async fn register_validation_failures_in_order() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    // Missing fields deserialize as empty; the email rule fires first
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "VALIDATION", "Email is required").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"email": "ann@x.com", "password": "12345"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "VALIDATION",
        "Password must be at least 6 characters long",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"email": "ann@x.com", "password": "secret1", "lastName": "Lee"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "VALIDATION", "First name is required").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"email": "ann@x.com", "password": "secret1", "firstName": "Ann"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "VALIDATION", "Last name is required").await;
}

#[actix_web::test]
async fn whitespace_only_names_are_rejected() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "   ",
            "lastName": "Lee",
            "email": "ann@x.com",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "VALIDATION", "First name is required").await;
}

#[actix_web::test]
async fn malformed_json_is_a_validation_failure() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"email": }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "VALIDATION", "Invalid JSON at line 1").await;
}

#[actix_web::test]
async fn register_then_fetch_profile_round_trips_the_account() {
    let state = test_state();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": " Ann ",
            "lastName": "Lee",
            "email": "Ann@X.com",
            "phone": "555-0100",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let profile: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(profile["firstName"], "Ann");
    assert_eq!(profile["lastName"], "Lee");
    assert_eq!(profile["email"], "ann@x.com");
    assert_eq!(profile["phone"], "555-0100");
    assert_eq!(profile["role"], "user");
    assert!(profile.get("id").is_some());
    // Credential material never appears in API responses
    assert!(profile.get("password").is_none());
    assert!(profile.get("passwordHash").is_none());
}
