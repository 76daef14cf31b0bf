use crate::{
    error::ApiError,
    model::notification::{Notification, NotificationStore},
    utils::validation::required,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateNotification {
    #[schema(example = "Holiday")]
    pub title: Option<String>,
    #[schema(example = "Office closed on Friday")]
    pub message: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "announcement")]
    pub kind: Option<String>,
}

#[utoipa::path(
    post,
    path = "/create-notification",
    request_body = CreateNotification,
    responses(
        (status = 201, description = "Notification created", body = Object, example = json!({
            "message": "Notification created",
            "notification": {}
        })),
        (status = 400, description = "Title and message are required")
    ),
    tag = "Notifications"
)]
pub async fn create_notification(
    store: web::Data<NotificationStore>,
    payload: web::Json<CreateNotification>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let title = required(p.title, "Title and message are required")?;
    let message = required(p.message, "Title and message are required")?;

    let notification = store.push(title, message, p.kind);

    Ok(HttpResponse::Created().json(json!({
        "message": "Notification created",
        "notification": notification
    })))
}

#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Notifications in creation order", body = [Notification]),
        (status = 404, description = "No notifications found")
    ),
    tag = "Notifications"
)]
pub async fn all_notifications(
    store: web::Data<NotificationStore>,
) -> actix_web::Result<impl Responder> {
    let notifications: Vec<Notification> = store.all();

    if notifications.is_empty() {
        return Err(ApiError::not_found("No notifications found").into());
    }

    Ok(HttpResponse::Ok().json(notifications))
}
