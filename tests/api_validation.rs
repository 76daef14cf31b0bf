//! Endpoint behaviour that is decided before any SQL runs.

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

#[actix_web::test]
async fn health_check_reports_ok() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").peer_addr(common::peer()).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "status": "OK", "message": "API is working properly" }));
}

#[actix_web::test]
async fn ten_hour_shift_is_flagged() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-attendance")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": 1,
            "punch_in_time": "2024-01-01T09:00:00Z",
            "punch_out_time": "2024-01-01T19:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "flag": true }));
}

#[actix_web::test]
async fn exactly_nine_and_a_half_hours_is_not_flagged() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-attendance")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": 0,
            "punch_in_time": "2024-01-01T09:00:00Z",
            "punch_out_time": "2024-01-01T18:30:00Z"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "flag": false }));
}

#[actix_web::test]
async fn check_attendance_requires_all_fields() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-attendance")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": 1, "punch_in_time": "2024-01-01T09:00:00Z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "User ID, punch-in time, and punch-out time are required"
    );
}

#[actix_web::test]
async fn check_attendance_rejects_garbage_timestamps() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-attendance")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": 1,
            "punch_in_time": "yesterday morning",
            "punch_out_time": "2024-01-01T19:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn register_with_mismatched_passwords_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(json!({
            "name": "Jane",
            "email": "jane@test.local",
            "password": "one",
            "confirmPassword": "two"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Passwords do not match");
}

#[actix_web::test]
async fn register_rejects_blank_name() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(json!({
            "name": "   ",
            "email": "blank@test.local",
            "password": "pw",
            "confirmPassword": "pw"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn malformed_json_gets_a_message_body() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/apply-leave")
        .peer_addr(common::peer())
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn create_endpoints_reject_missing_fields() {
    let app = test_app!();

    let cases = [
        ("/apply-leave", json!({ "user_id": 1 }), "All fields are required"),
        ("/tickets", json!({ "category": "IT" }), "All fields are required."),
        ("/core-values", json!({ "title": "Ownership" }), "Title and description are required"),
        ("/company-info", json!({ "type": "mission" }), "Type and content are required"),
        ("/add_new_employee", json!({ "user_id": 1 }), "All fields are required"),
        ("/add_post", json!({ "title": "Hi" }), "All required fields must be provided"),
        ("/regularization", json!({ "user_id": 1 }), "Missing required fields"),
        ("/regularlarization", json!({ "user_id": 1 }), "Missing required fields"),
    ];

    for (uri, payload, message) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .peer_addr(common::peer())
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message, "{uri}");
    }
}

#[actix_web::test]
async fn inverted_leave_dates_are_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/apply-leave")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": 1,
            "leave_type": "casual",
            "start_date": "2026-03-10",
            "end_date": "2026-03-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn inverted_regularization_dates_are_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/regularization")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": 1,
            "start_date": "2026-03-10",
            "end_date": "2026-03-01",
            "start_time": 9,
            "end_time": 18
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "start_date cannot be after end_date");
}

#[actix_web::test]
async fn negative_leave_deduction_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/check-leave-balance")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": 1, "leave_days": -3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn notifications_live_in_process() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/notifications")
        .peer_addr(common::peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/create-notification")
        .peer_addr(common::peer())
        .set_json(json!({ "title": "Holiday", "message": "Office closed", "type": "event" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Notification created");
    assert_eq!(body["notification"]["id"], 1);
    assert_eq!(body["notification"]["type"], "event");

    let req = test::TestRequest::get()
        .uri("/notifications")
        .peer_addr(common::peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Holiday");
}

#[actix_web::test]
async fn notification_requires_title_and_message() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/create-notification")
        .peer_addr(common::peer())
        .set_json(json!({ "title": "Holiday" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
