use crate::{
    error::ApiError,
    model::{regularization::Regularization, request_status::RequestStatus},
    utils::{
        db_utils::{fetch_all_newest_first, fetch_inserted},
        validation::required,
    },
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateRegularization {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub end_date: Option<NaiveDate>,
    /// hour of day, 0 is midnight
    #[schema(example = 9)]
    pub start_time: Option<i32>,
    #[schema(example = 30)]
    pub start_time_minutes: Option<i32>,
    #[schema(example = 18)]
    pub end_time: Option<i32>,
    #[schema(example = 0)]
    pub end_time_minutes: Option<i32>,
    pub comments: Option<String>,
}

const MISSING_FIELDS: &str = "Missing required fields";

/// Ask for an attendance correction
#[utoipa::path(
    post,
    path = "/regularization",
    request_body = CreateRegularization,
    responses(
        (status = 201, description = "Regularization stored", body = Object, example = json!({
            "message": "Regularization request applied successfully",
            "data": {}
        })),
        (status = 400, description = "Missing required fields or inverted dates"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Regularization"
)]
pub async fn apply_regularization(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateRegularization>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();

    let user_id = required(p.user_id, MISSING_FIELDS)?;
    let start_date = required(p.start_date, MISSING_FIELDS)?;
    let end_date = required(p.end_date, MISSING_FIELDS)?;
    let start_time = required(p.start_time, MISSING_FIELDS)?;
    let end_time = required(p.end_time, MISSING_FIELDS)?;

    if start_date > end_date {
        return Err(ApiError::bad_request("start_date cannot be after end_date").into());
    }

    let result = sqlx::query(
        r#"
        INSERT INTO attendance_regularization
            (user_id, start_date, end_date, start_time, start_time_minutes,
             end_time, end_time_minutes, comments, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .bind(start_time)
    .bind(p.start_time_minutes)
    .bind(end_time)
    .bind(p.end_time_minutes)
    .bind(&p.comments)
    .bind(RequestStatus::Pending.as_ref())
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to apply regularization request"))?;

    let data: Regularization = fetch_inserted(
        pool.get_ref(),
        "attendance_regularization",
        result.last_insert_id(),
    )
    .await
    .map_err(ApiError::database("Failed to read back regularization request"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Regularization request applied successfully",
        "data": data
    })))
}

/// Every regularization request, newest first
#[utoipa::path(
    get,
    path = "/regularization",
    responses(
        (status = 200, description = "Regularization requests", body = Object, example = json!({ "data": [] })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Regularization"
)]
pub async fn list_regularizations(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let data: Vec<Regularization> =
        fetch_all_newest_first(pool.get_ref(), "attendance_regularization")
            .await
            .map_err(ApiError::database("Failed to fetch regularization requests"))?;

    Ok(HttpResponse::Ok().json(json!({ "data": data })))
}
