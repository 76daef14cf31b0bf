use crate::{
    error::ApiError,
    model::{leave_request::LeaveRequest, request_status::RequestStatus},
    utils::{db_utils::fetch_inserted, validation::required},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "sick")]
    pub leave_type: Option<String>,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-01-02", format = "date", value_type = String)]
    pub end_date: Option<NaiveDate>,
    #[schema(example = "Family function")]
    pub comments: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LeaveDeduction {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = 2)]
    pub leave_days: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaveFilter {
    /// Only requests of this user
    pub user_id: Option<u64>,
}

/// Monthly allowance: one leave request per calendar month
pub fn monthly_allowance(requests_this_month: i64) -> u8 {
    if requests_this_month > 0 { 0 } else { 1 }
}

/// Balance left after taking `leave_days`, or `None` if it would go negative
pub fn remaining_balance(balance: i32, leave_days: i32) -> Option<i32> {
    balance.checked_sub(leave_days).filter(|left| *left >= 0)
}

fn month_bounds(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = today.with_day(1)?;
    let next = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
    };
    Some((first, next))
}

const MISSING_LEAVE_FIELDS: &str = "All fields are required";

/// Submit a leave request. No balance or overlap checks are made.
#[utoipa::path(
    post,
    path = "/apply-leave",
    request_body = CreateLeave,
    responses(
        (status = 201, description = "Leave request stored", body = Object, example = json!({
            "message": "Leave request submitted successfully",
            "leaveRequest": {
                "id": 1,
                "user_id": 1,
                "leave_type": "sick",
                "start_date": "2026-01-01",
                "end_date": "2026-01-02",
                "comments": null,
                "status": "Pending",
                "created_at": "2026-01-01T00:00:00Z"
            }
        })),
        (status = 400, description = "Missing fields or inverted dates"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    let user_id = required(payload.user_id, MISSING_LEAVE_FIELDS)?;
    let leave_type = required(payload.leave_type, MISSING_LEAVE_FIELDS)?;
    let start_date = required(payload.start_date, MISSING_LEAVE_FIELDS)?;
    let end_date = required(payload.end_date, MISSING_LEAVE_FIELDS)?;

    if start_date > end_date {
        return Err(ApiError::bad_request("start_date cannot be after end_date").into());
    }

    let result = sqlx::query(
        r#"
        INSERT INTO leave_requests
            (user_id, leave_type, start_date, end_date, comments, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&leave_type)
    .bind(start_date)
    .bind(end_date)
    .bind(&payload.comments)
    .bind(RequestStatus::Pending.as_ref())
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to create leave request"))?;

    let leave: LeaveRequest = fetch_inserted(pool.get_ref(), "leave_requests", result.last_insert_id())
        .await
        .map_err(ApiError::database("Failed to read back leave request"))?;

    info!(user_id, leave_id = leave.id, "Leave request submitted");

    Ok(HttpResponse::Created().json(json!({
        "message": "Leave request submitted successfully",
        "leaveRequest": leave
    })))
}

/// List leave requests, latest start date first
#[utoipa::path(
    get,
    path = "/leave/requests",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Leave requests", body = Object, example = json!({
            "message": "Leave requests retrieved successfully",
            "leaveRequests": []
        })),
        (status = 404, description = "No leave requests found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn leave_requests(
    pool: web::Data<MySqlPool>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    let leaves = match query.user_id {
        Some(user_id) => {
            sqlx::query_as::<_, LeaveRequest>(
                "SELECT * FROM leave_requests WHERE user_id = ? ORDER BY start_date DESC",
            )
            .bind(user_id)
            .fetch_all(pool.get_ref())
            .await
        }
        None => {
            sqlx::query_as::<_, LeaveRequest>(
                "SELECT * FROM leave_requests ORDER BY start_date DESC",
            )
            .fetch_all(pool.get_ref())
            .await
        }
    }
    .map_err(ApiError::database("Failed to fetch leave requests"))?;

    if leaves.is_empty() {
        return Err(ApiError::not_found("No leave requests found").into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave requests retrieved successfully",
        "leaveRequests": leaves
    })))
}

/// Names of everyone with a leave request covering today
#[utoipa::path(
    get,
    path = "/leave/today",
    responses(
        (status = 200, description = "People on leave", body = Object, example = json!({
            "message": "People on leave today",
            "names": ["Jane Doe"]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn people_on_leave_today(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let today = Utc::now().date_naive();

    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT u.name
        FROM leave_requests lr
        JOIN users u ON lr.user_id = u.id
        WHERE ? BETWEEN lr.start_date AND lr.end_date
        "#,
    )
    .bind(today)
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch people on leave today"))?;

    if names.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({
            "message": "No one is on leave today"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "People on leave today",
        "names": names
    })))
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BalanceQuery {
    /// User to report on
    pub user_id: Option<u64>,
}

/// Monthly leave allowance: 1 if the user has no request starting this
/// month, else 0. This is not the `leave_balance` ledger.
#[utoipa::path(
    get,
    path = "/leave-balance",
    params(BalanceQuery),
    responses(
        (status = 200, description = "Allowance for the current month", body = Object, example = json!({
            "message": "Leave balance retrieved successfully",
            "leaveBalance": 1
        })),
        (status = 400, description = "User ID is required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn leave_balance(
    pool: web::Data<MySqlPool>,
    query: web::Query<BalanceQuery>,
) -> actix_web::Result<impl Responder> {
    let user_id = required(query.user_id, "User ID is required")?;
    let (month_start, next_month) =
        month_bounds(Utc::now().date_naive()).ok_or(ApiError::Internal)?;

    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM leave_requests
        WHERE user_id = ?
          AND start_date >= ?
          AND start_date < ?
        "#,
    )
    .bind(user_id)
    .bind(month_start)
    .bind(next_month)
    .fetch_one(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to count leave requests"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave balance retrieved successfully",
        "leaveBalance": monthly_allowance(count)
    })))
}

/// Deduct days from the user's leave ledger if enough remain
#[utoipa::path(
    post,
    path = "/check-leave-balance",
    request_body = LeaveDeduction,
    responses(
        (status = 200, description = "Leave granted", body = Object, example = json!({
            "message": "Leave granted",
            "new_leave_balance": 10
        })),
        (status = 400, description = "Insufficient balance or invalid input", body = Object, example = json!({
            "message": "Insufficient leave balance"
        })),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn check_leave_balance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<LeaveDeduction>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let user_id = required(payload.user_id, "User ID and leave days are required")?;
    let leave_days = required(payload.leave_days, "User ID and leave days are required")?;

    if leave_days < 0 {
        return Err(ApiError::bad_request("leave_days cannot be negative").into());
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(ApiError::database("Failed to start leave deduction"))?;

    // the row lock serializes concurrent grants for the same user
    let balance = sqlx::query_scalar::<_, i32>(
        "SELECT leave_balance FROM users WHERE id = ? FOR UPDATE",
    )
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(ApiError::database("Failed to read leave balance"))?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    // dropping `tx` on the early returns rolls back and releases the lock
    let Some(new_balance) = remaining_balance(balance, leave_days) else {
        debug!(user_id, leave_days, balance, "Leave refused");
        return Err(ApiError::bad_request("Insufficient leave balance").into());
    };

    sqlx::query("UPDATE users SET leave_balance = ? WHERE id = ?")
        .bind(new_balance)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(ApiError::database("Failed to deduct leave balance"))?;

    tx.commit()
        .await
        .map_err(ApiError::database("Failed to commit leave deduction"))?;

    info!(user_id, leave_days, new_balance, "Leave granted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave granted",
        "new_leave_balance": new_balance
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowance_is_spent_by_any_request() {
        assert_eq!(monthly_allowance(0), 1);
        assert_eq!(monthly_allowance(1), 0);
        assert_eq!(monthly_allowance(4), 0);
    }

    #[test]
    fn deduction_may_empty_the_balance_but_not_overdraw_it() {
        assert_eq!(remaining_balance(12, 2), Some(10));
        assert_eq!(remaining_balance(10, 10), Some(0));
        assert_eq!(remaining_balance(10, 11), None);
        assert_eq!(remaining_balance(5, 0), Some(5));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (start, next) = month_bounds(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_cover_the_whole_month() {
        let (start, next) = month_bounds(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(next, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
