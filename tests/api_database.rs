//! Scenarios that need a MySQL database loaded with `schema.sql`.
//!
//! Run with `TEST_DATABASE_URL=mysql://... cargo test -- --ignored`.

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn register_then_login_returns_token() {
    let app = test_app!();
    let email = common::unique_email("login");

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(json!({
            "name": "Jane Doe",
            "email": email,
            "password": "s3cret!",
            "confirmPassword": "s3cret!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(common::peer())
        .set_json(json!({ "email": email, "password": "s3cret!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap_or_default();
    assert!(!token.is_empty());

    let claims = hr_portal::auth::jwt::verify_token(token, &common::test_config().jwt_secret)
        .expect("token should verify");
    assert_eq!(claims.sub, email);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn wrong_password_is_rejected() {
    let app = test_app!();
    let email = common::unique_email("wrongpw");

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(json!({
            "name": "Sam",
            "email": email,
            "password": "right",
            "confirmPassword": "right"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(common::peer())
        .set_json(json!({ "email": email, "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn duplicate_email_is_rejected() {
    let app = test_app!();
    let email = common::unique_email("dup");
    let payload = json!({
        "name": "Dup",
        "email": email,
        "password": "pw",
        "confirmPassword": "pw"
    });

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_user_is_404() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/users/99999")
        .peer_addr(common::peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User not found" }));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn leave_deduction_never_overdraws() {
    let app = test_app!();
    let email = common::unique_email("leave");

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(common::peer())
        .set_json(json!({
            "name": "Lee",
            "email": email,
            "password": "pw",
            "confirmPassword": "pw"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/users?email={email}"))
        .peer_addr(common::peer())
        .to_request();
    let users: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = users[0]["id"].as_u64().expect("registered user should be listed");

    let req = test::TestRequest::post()
        .uri("/check-leave-balance")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": user_id, "leave_days": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Leave granted", "new_leave_balance": 10 }));

    let req = test::TestRequest::post()
        .uri("/check-leave-balance")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": user_id, "leave_days": 11 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Insufficient leave balance");

    let pool = common::lazy_pool();
    assert_eq!(common::stored_leave_balance(&pool, user_id).await, 10);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn asset_cannot_be_allotted_twice() {
    let app = test_app!();
    let pool = common::lazy_pool();
    let first = common::seed_user(&pool, "holder").await;
    let second = common::seed_user(&pool, "waiter").await;
    let asset_id = common::seed_asset(&pool).await;

    let req = test::TestRequest::post()
        .uri("/asset/allot")
        .peer_addr(common::peer())
        .set_json(json!({ "userId": first, "assetId": asset_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/asset/allot")
        .peer_addr(common::peer())
        .set_json(json!({ "userId": second, "assetId": asset_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Asset is already allotted" }));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn user_without_assets_is_404() {
    let app = test_app!();
    let user_id = common::seed_user(&common::lazy_pool(), "empty-handed").await;

    let req = test::TestRequest::get()
        .uri(&format!("/user/{user_id}/assets"))
        .peer_addr(common::peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "No assets found for this user" }));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn second_punch_in_same_day_is_rejected() {
    let app = test_app!();
    let user_id = common::seed_user(&common::lazy_pool(), "early-bird").await;

    let req = test::TestRequest::post()
        .uri("/punch-in")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/punch-in")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Already punched in today" }));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn punch_in_for_unknown_user_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/punch-in")
        .peer_addr(common::peer())
        .set_json(json!({ "user_id": 99_999_999u64 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User does not exist" }));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn applying_for_leave_uses_up_the_monthly_allowance() {
    let app = test_app!();
    let user_id = common::seed_user(&common::lazy_pool(), "allowance").await;
    let today = chrono::Utc::now().date_naive().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/leave-balance?user_id={user_id}"))
        .peer_addr(common::peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leaveBalance"], 1);

    let req = test::TestRequest::post()
        .uri("/apply-leave")
        .peer_addr(common::peer())
        .set_json(json!({
            "user_id": user_id,
            "leave_type": "casual",
            "start_date": today,
            "end_date": today
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/leave-balance?user_id={user_id}"))
        .peer_addr(common::peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leaveBalance"], 0);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn company_info_is_added_then_updated() {
    let app = test_app!();
    let info_type = format!("policy-{}", uuid::Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/company-info")
        .peer_addr(common::peer())
        .set_json(json!({ "type": info_type, "content": "Be kind" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Company info added successfully");

    // same content again still counts as an update
    let req = test::TestRequest::post()
        .uri("/company-info")
        .peer_addr(common::peer())
        .set_json(json!({ "type": info_type, "content": "Be kind" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Company info updated successfully");
    assert_eq!(body["companyInfo"]["content"], "Be kind");
}
