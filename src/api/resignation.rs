use crate::{
    error::ApiError,
    model::{
        request_status::RequestStatus,
        resignation::{NOTICE_PERIOD_DAYS, ResignationRequest, last_working_day},
    },
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
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateResignation {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "2026-01-15", format = "date", value_type = String)]
    pub request_date: Option<NaiveDate>,
    #[schema(example = "2026-03-31", format = "date", value_type = String)]
    pub proposed_lwd: Option<NaiveDate>,
    pub reason: Option<String>,
    pub comments: Option<String>,
}

/// Submit a resignation. The last working day is the request date plus the
/// fixed notice period.
#[utoipa::path(
    post,
    path = "/resignation",
    request_body = CreateResignation,
    responses(
        (status = 201, description = "Resignation stored", body = Object, example = json!({
            "message": "Resignation request submitted successfully",
            "data": {}
        })),
        (status = 400, description = "User ID and request date are required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resignation"
)]
pub async fn create_resignation(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateResignation>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let user_id = required(p.user_id, "User ID and request date are required")?;
    let request_date = required(p.request_date, "User ID and request date are required")?;

    let lwd = last_working_day(request_date, NOTICE_PERIOD_DAYS)
        .ok_or_else(|| ApiError::bad_request("request_date is out of range"))?;

    let result = sqlx::query(
        r#"
        INSERT INTO resignation_requests
            (user_id, request_date, notice_period, lwd, proposed_lwd, reason, comments, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(request_date)
    .bind(NOTICE_PERIOD_DAYS)
    .bind(lwd)
    .bind(p.proposed_lwd)
    .bind(&p.reason)
    .bind(&p.comments)
    .bind(RequestStatus::Pending.as_ref())
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to submit resignation request"))?;

    let data: ResignationRequest =
        fetch_inserted(pool.get_ref(), "resignation_requests", result.last_insert_id())
            .await
            .map_err(ApiError::database("Failed to read back resignation request"))?;

    info!(user_id, %lwd, "Resignation submitted");

    Ok(HttpResponse::Created().json(json!({
        "message": "Resignation request submitted successfully",
        "data": data
    })))
}

#[utoipa::path(
    get,
    path = "/resignation",
    responses(
        (status = 200, description = "Resignation requests, newest first", body = [ResignationRequest]),
        (status = 404, description = "No resignation requests found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resignation"
)]
pub async fn all_resignations(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let requests: Vec<ResignationRequest> =
        fetch_all_newest_first(pool.get_ref(), "resignation_requests")
            .await
            .map_err(ApiError::database("Failed to fetch resignation requests"))?;

    if requests.is_empty() {
        return Err(ApiError::not_found("No resignation requests found").into());
    }

    Ok(HttpResponse::Ok().json(requests))
}
