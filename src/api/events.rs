use crate::{
    error::ApiError,
    model::employee::{anniversary_message, birthday_message},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use sqlx::MySqlPool;

/// Birthday greetings for today
#[utoipa::path(
    get,
    path = "/check-birthdays",
    responses(
        (status = 200, description = "Birthday messages", body = Object, example = json!({
            "messages": ["Today is Jane Doe's birthday"]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Events"
)]
pub async fn check_birthdays(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let today = Utc::now().date_naive().format("%m-%d").to_string();

    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT u.name
        FROM new_employee e
        JOIN users u ON e.user_id = u.id
        WHERE DATE_FORMAT(e.dob, '%m-%d') = ?
        "#,
    )
    .bind(today)
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to check birthdays"))?;

    if names.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "No birthdays today" })));
    }

    let messages: Vec<String> = names.iter().map(|n| birthday_message(n)).collect();
    Ok(HttpResponse::Ok().json(json!({ "messages": messages })))
}

/// Work anniversaries falling on today
#[utoipa::path(
    get,
    path = "/year-celebration",
    responses(
        (status = 200, description = "Anniversary message", body = Object, example = json!({
            "message": "Congratulations EMP-001, you have 3 year(s) of service today!"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Events"
)]
pub async fn check_anniversary(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let joinings = sqlx::query_as::<_, (String, NaiveDate)>(
        "SELECT emp_code, date_of_joining FROM new_employee",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to check anniversaries"))?;

    let today = Utc::now().date_naive();
    let messages: Vec<String> = joinings
        .iter()
        .filter_map(|(code, joined)| anniversary_message(code, *joined, today))
        .collect();

    let message = if messages.is_empty() {
        "No anniversaries today".to_string()
    } else {
        messages.join(", ")
    };

    Ok(HttpResponse::Ok().json(json!({ "message": message })))
}
