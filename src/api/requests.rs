use crate::{
    error::ApiError,
    model::{
        leave_request::LeaveRequest, regularization::Regularization,
        request_status::RequestStatus,
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde_json::{Map, Value};
use sqlx::MySqlPool;

/// Leave and regularization requests carrying `status`, under the
/// status-specific keys from [`RequestStatus::view_keys`].
async fn requests_by_status(
    pool: &MySqlPool,
    status: RequestStatus,
) -> actix_web::Result<HttpResponse> {
    let leaves = sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE status = ?")
        .bind(status.as_ref())
        .fetch_all(pool)
        .await
        .map_err(ApiError::database("Failed to fetch leave requests by status"))?;

    let regularizations = sqlx::query_as::<_, Regularization>(
        "SELECT * FROM attendance_regularization WHERE status = ?",
    )
    .bind(status.as_ref())
    .fetch_all(pool)
    .await
    .map_err(ApiError::database("Failed to fetch regularization requests by status"))?;

    let (leave_key, regularization_key) = status.view_keys();
    let mut body = Map::new();
    body.insert(
        leave_key,
        serde_json::to_value(leaves).map_err(|_| ApiError::Internal)?,
    );
    body.insert(
        regularization_key,
        serde_json::to_value(regularizations).map_err(|_| ApiError::Internal)?,
    );

    Ok(HttpResponse::Ok().json(Value::Object(body)))
}

#[utoipa::path(
    get,
    path = "/pending-requests",
    responses(
        (status = 200, description = "Pending requests", body = Object, example = json!({
            "leaveRequests": [],
            "regularizationRequests": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Requests"
)]
pub async fn pending_requests(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    requests_by_status(pool.get_ref(), RequestStatus::Pending).await
}

#[utoipa::path(
    get,
    path = "/approved-requests",
    responses(
        (status = 200, description = "Approved requests", body = Object, example = json!({
            "approvedLeaveRequests": [],
            "approvedRegularizationRequests": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Requests"
)]
pub async fn approved_requests(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    requests_by_status(pool.get_ref(), RequestStatus::Approved).await
}

#[utoipa::path(
    get,
    path = "/rejected-requests",
    responses(
        (status = 200, description = "Rejected requests", body = Object, example = json!({
            "rejectedLeaveRequests": [],
            "rejectedRegularizationRequests": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Requests"
)]
pub async fn rejected_requests(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    requests_by_status(pool.get_ref(), RequestStatus::Rejected).await
}

#[utoipa::path(
    get,
    path = "/draft-requests",
    responses(
        (status = 200, description = "Draft requests", body = Object, example = json!({
            "draftLeaveRequests": [],
            "draftRegularizationRequests": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Requests"
)]
pub async fn draft_requests(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    requests_by_status(pool.get_ref(), RequestStatus::Draft).await
}

#[utoipa::path(
    get,
    path = "/undo-requests",
    responses(
        (status = 200, description = "Undone requests", body = Object, example = json!({
            "undoLeaveRequests": [],
            "undoRegularizationRequests": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Requests"
)]
pub async fn undo_requests(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    requests_by_status(pool.get_ref(), RequestStatus::Undo).await
}
