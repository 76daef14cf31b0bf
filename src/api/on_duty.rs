use crate::{
    error::ApiError,
    model::{on_duty::OnDutyRequest, request_status::RequestStatus},
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
#[serde(rename_all = "camelCase")]
pub struct CreateOnDuty {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "Client visit")]
    pub reason: Option<String>,
    #[schema(example = "2026-02-03", format = "date", value_type = String)]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-02-03", format = "date", value_type = String)]
    pub end_date: Option<NaiveDate>,
    pub start_hours: Option<i32>,
    pub start_minutes: Option<i32>,
    pub end_hours: Option<i32>,
    pub end_minutes: Option<i32>,
    pub comments: Option<String>,
}

const REQUIRED: &str = "userId, startDate, and endDate are required";

#[utoipa::path(
    post,
    path = "/on-duty",
    request_body = CreateOnDuty,
    responses(
        (status = 201, description = "On-duty request stored", body = Object, example = json!({
            "message": "On Duty request created successfully",
            "data": {}
        })),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "On Duty"
)]
pub async fn create_on_duty(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateOnDuty>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let user_id = required(p.user_id, REQUIRED)?;
    let start_date = required(p.start_date, REQUIRED)?;
    let end_date = required(p.end_date, REQUIRED)?;

    if start_date > end_date {
        return Err(ApiError::bad_request("startDate cannot be after endDate").into());
    }

    let result = sqlx::query(
        r#"
        INSERT INTO on_duty_requests
            (user_id, reason, start_date, end_date, start_hours, start_minutes,
             end_hours, end_minutes, comments, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&p.reason)
    .bind(start_date)
    .bind(end_date)
    .bind(p.start_hours)
    .bind(p.start_minutes)
    .bind(p.end_hours)
    .bind(p.end_minutes)
    .bind(&p.comments)
    .bind(RequestStatus::Pending.as_ref())
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to create on-duty request"))?;

    let data: OnDutyRequest =
        fetch_inserted(pool.get_ref(), "on_duty_requests", result.last_insert_id())
            .await
            .map_err(ApiError::database("Failed to read back on-duty request"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "On Duty request created successfully",
        "data": data
    })))
}

#[utoipa::path(
    get,
    path = "/on-duty",
    responses(
        (status = 200, description = "On-duty requests, newest first", body = [OnDutyRequest]),
        (status = 404, description = "No On Duty requests found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "On Duty"
)]
pub async fn all_on_duty(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let requests: Vec<OnDutyRequest> = fetch_all_newest_first(pool.get_ref(), "on_duty_requests")
        .await
        .map_err(ApiError::database("Failed to fetch on-duty requests"))?;

    if requests.is_empty() {
        return Err(ApiError::not_found("No On Duty requests found").into());
    }

    Ok(HttpResponse::Ok().json(requests))
}
