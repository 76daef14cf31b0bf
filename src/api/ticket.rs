use crate::{
    error::ApiError,
    model::{request_status::RequestStatus, ticket::Ticket},
    utils::{
        db_utils::{fetch_all_newest_first, fetch_inserted},
        validation::required,
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateTicket {
    #[schema(example = "IT")]
    pub category: Option<String>,
    #[schema(example = "Laptop")]
    pub subcategory: Option<String>,
    #[schema(example = "High")]
    pub priority: Option<String>,
    #[schema(example = "Screen flickers after docking")]
    pub description: Option<String>,
}

const ALL_FIELDS: &str = "All fields are required.";

/// Raise a helpdesk ticket
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created", body = Object, example = json!({
            "message": "Ticket created successfully",
            "ticket": {}
        })),
        (status = 400, description = "All fields are required."),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tickets"
)]
pub async fn create_ticket(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateTicket>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let category = required(p.category, ALL_FIELDS)?;
    let subcategory = required(p.subcategory, ALL_FIELDS)?;
    let priority = required(p.priority, ALL_FIELDS)?;
    let description = required(p.description, ALL_FIELDS)?;

    let result = sqlx::query(
        r#"
        INSERT INTO tickets (category, subcategory, priority, description, status)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&category)
    .bind(&subcategory)
    .bind(&priority)
    .bind(&description)
    .bind(RequestStatus::Pending.as_ref())
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to create ticket"))?;

    let ticket: Ticket = fetch_inserted(pool.get_ref(), "tickets", result.last_insert_id())
        .await
        .map_err(ApiError::database("Failed to read back ticket"))?;

    info!(ticket_id = ticket.id, %category, %priority, "Ticket created");

    Ok(HttpResponse::Created().json(json!({
        "message": "Ticket created successfully",
        "ticket": ticket
    })))
}

#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "Tickets, newest first", body = [Ticket]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tickets"
)]
pub async fn all_tickets(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let tickets: Vec<Ticket> = fetch_all_newest_first(pool.get_ref(), "tickets")
        .await
        .map_err(ApiError::database("Failed to fetch tickets"))?;

    Ok(HttpResponse::Ok().json(tickets))
}

/// Tickets in a given status. The status is matched verbatim.
#[utoipa::path(
    get,
    path = "/tickets/status/{status}",
    params(
        ("status" = String, Path, description = "Ticket status, e.g. Pending")
    ),
    responses(
        (status = 200, description = "Matching tickets", body = [Ticket]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tickets"
)]
pub async fn tickets_by_status(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let tickets = sqlx::query_as::<_, Ticket>(
        "SELECT * FROM tickets WHERE status = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(path.into_inner())
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch tickets by status"))?;

    Ok(HttpResponse::Ok().json(tickets))
}
