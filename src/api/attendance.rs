use crate::{
    db::{ConstraintViolation, constraint_violation},
    error::ApiError,
    model::attendance::{AttendanceRecord, PunchTimes, is_overtime, parse_punch_time, worked_hours},
    utils::validation::required,
};
use actix_web::{HttpResponse, Responder, web};
use chrono::{Days, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CheckAttendance {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "2024-01-01T09:00:00Z")]
    pub punch_in_time: Option<String>,
    #[schema(example = "2024-01-01T19:00:00Z")]
    pub punch_out_time: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceFlag {
    /// true when the shift ran longer than 9.5 hours
    pub flag: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct UserRef {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
}

const MISSING_PUNCH_FIELDS: &str = "User ID, punch-in time, and punch-out time are required";

/// Flag shifts longer than 9.5 hours. Nothing is stored.
#[utoipa::path(
    post,
    path = "/check-attendance",
    request_body = CheckAttendance,
    responses(
        (status = 200, description = "Overtime flag computed", body = AttendanceFlag),
        (status = 400, description = "Missing or unparseable input", body = Object, example = json!({
            "message": "User ID, punch-in time, and punch-out time are required"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_attendance(
    payload: web::Json<CheckAttendance>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    let user_id = required(payload.user_id, MISSING_PUNCH_FIELDS)?;
    let punch_in = required(payload.punch_in_time, MISSING_PUNCH_FIELDS)?;
    let punch_out = required(payload.punch_out_time, MISSING_PUNCH_FIELDS)?;

    let (punch_in, punch_out) = match (parse_punch_time(&punch_in), parse_punch_time(&punch_out)) {
        (Some(i), Some(o)) => (i, o),
        _ => {
            return Err(ApiError::bad_request(
                "punch_in_time and punch_out_time must be valid timestamps",
            )
            .into());
        }
    };

    let flag = is_overtime(punch_in, punch_out);
    debug!(user_id, hours = worked_hours(punch_in, punch_out), flag, "Attendance evaluated");

    Ok(HttpResponse::Ok().json(AttendanceFlag { flag }))
}

/// Record today's punch-in
#[utoipa::path(
    post,
    path = "/punch-in",
    request_body = UserRef,
    responses(
        (status = 201, description = "Punched in", body = Object, example = json!({
            "message": "Punched in successfully"
        })),
        (status = 400, description = "Already punched in today, or user does not exist", body = Object, example = json!({
            "message": "Already punched in today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn punch_in(
    pool: web::Data<MySqlPool>,
    payload: web::Json<UserRef>,
) -> actix_web::Result<impl Responder> {
    let user_id = required(payload.into_inner().user_id, "User ID is required")?;
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO attendance_records (user_id, work_date, punch_in_time)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(now.date_naive())
    .bind(now)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => Ok(HttpResponse::Created().json(json!({
            "message": "Punched in successfully"
        }))),
        Err(e) => match constraint_violation(&e) {
            // (user_id, work_date) already has a row
            Some(ConstraintViolation::DuplicateKey) => {
                debug!(user_id, "Second punch-in today rejected");
                Err(ApiError::bad_request("Already punched in today").into())
            }
            Some(ConstraintViolation::MissingReference) => {
                Err(ApiError::bad_request("User does not exist").into())
            }
            _ => {
                error!(error = %e, user_id, "Punch-in failed");
                Err(ApiError::Internal.into())
            }
        },
    }
}

/// Close today's punch-in and report the worked hours
#[utoipa::path(
    post,
    path = "/punch-out",
    request_body = UserRef,
    responses(
        (status = 200, description = "Punched out", body = Object, example = json!({
            "message": "Punched out successfully",
            "worked_hours": 9.75,
            "flag": true
        })),
        (status = 400, description = "No open punch-in today", body = Object, example = json!({
            "message": "No active punch-in found for today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn punch_out(
    pool: web::Data<MySqlPool>,
    payload: web::Json<UserRef>,
) -> actix_web::Result<impl Responder> {
    let user_id = required(payload.into_inner().user_id, "User ID is required")?;
    let now = Utc::now();
    let today = now.date_naive();

    let result = sqlx::query(
        r#"
        UPDATE attendance_records
        SET punch_out_time = ?
        WHERE user_id = ?
        AND work_date = ?
        AND punch_out_time IS NULL
        "#,
    )
    .bind(now)
    .bind(user_id)
    .bind(today)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Punch-out failed"))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::bad_request("No active punch-in found for today").into());
    }

    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, user_id, work_date, punch_in_time, punch_out_time
        FROM attendance_records
        WHERE user_id = ? AND work_date = ?
        "#,
    )
    .bind(user_id)
    .bind(today)
    .fetch_one(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to read attendance after punch-out"))?;

    let punch_out = record.punch_out_time.unwrap_or(now);
    let hours = worked_hours(record.punch_in_time, punch_out);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Punched out successfully",
        "worked_hours": (hours * 100.0).round() / 100.0,
        "flag": is_overtime(record.punch_in_time, punch_out),
    })))
}

/// Yesterday's punch-in and punch-out for a user
#[utoipa::path(
    post,
    path = "/check-PreviousDayAttendance",
    request_body = UserRef,
    responses(
        (status = 200, description = "Previous day attendance", body = PunchTimes),
        (status = 400, description = "User ID is required"),
        (status = 404, description = "No record", body = Object, example = json!({
            "message": "No attendance record found for the previous day"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn previous_day_attendance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<UserRef>,
) -> actix_web::Result<impl Responder> {
    let user_id = required(payload.into_inner().user_id, "User ID is required")?;

    let previous_day = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .ok_or(ApiError::Internal)?;

    let times = sqlx::query_as::<_, PunchTimes>(
        r#"
        SELECT punch_in_time, punch_out_time
        FROM attendance_records
        WHERE user_id = ? AND work_date = ?
        "#,
    )
    .bind(user_id)
    .bind(previous_day)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch previous day attendance"))?
    .ok_or_else(|| ApiError::not_found("No attendance record found for the previous day"))?;

    Ok(HttpResponse::Ok().json(times))
}
