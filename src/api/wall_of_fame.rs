use crate::{
    error::ApiError,
    model::wall_of_fame::WallOfFameEntry,
    utils::{
        db_utils::{fetch_all_newest_first, fetch_inserted},
        validation::required,
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateEntry {
    pub badge_url: Option<String>,
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "Shipped the payroll revamp")]
    pub comment: Option<String>,
}

const REQUIRED: &str = "badge_url, comment, and user ID are required";

#[utoipa::path(
    post,
    path = "/wall-of-fame/post",
    request_body = CreateEntry,
    responses(
        (status = 201, description = "Entry stored", body = Object, example = json!({
            "message": "Entry added successfully",
            "entry": {}
        })),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wall of Fame"
)]
pub async fn add_entry(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEntry>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let badge_url = required(p.badge_url, REQUIRED)?;
    let comment = required(p.comment, REQUIRED)?;
    let user_id = required(p.user_id, REQUIRED)?;

    let result = sqlx::query("INSERT INTO wall_of_fame (badge_url, comment, user_id) VALUES (?, ?, ?)")
        .bind(&badge_url)
        .bind(&comment)
        .bind(user_id)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to add wall of fame entry"))?;

    let entry: WallOfFameEntry =
        fetch_inserted(pool.get_ref(), "wall_of_fame", result.last_insert_id())
            .await
            .map_err(ApiError::database("Failed to read back wall of fame entry"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Entry added successfully",
        "entry": entry
    })))
}

#[utoipa::path(
    get,
    path = "/wall-of-fame",
    responses(
        (status = 200, description = "Entries, newest first", body = [WallOfFameEntry]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wall of Fame"
)]
pub async fn all_entries(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let entries: Vec<WallOfFameEntry> = fetch_all_newest_first(pool.get_ref(), "wall_of_fame")
        .await
        .map_err(ApiError::database("Failed to fetch wall of fame"))?;

    Ok(HttpResponse::Ok().json(entries))
}

#[utoipa::path(
    get,
    path = "/wall-of-fame/{user_id}",
    params(
        ("user_id" = u64, Path, description = "Recognized user")
    ),
    responses(
        (status = 200, description = "Entries for the user", body = [WallOfFameEntry]),
        (status = 404, description = "No entries found for this user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wall of Fame"
)]
pub async fn entries_by_user(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let entries = sqlx::query_as::<_, WallOfFameEntry>(
        "SELECT * FROM wall_of_fame WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(path.into_inner())
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch wall of fame entries by user"))?;

    if entries.is_empty() {
        return Err(ApiError::not_found("No entries found for this user").into());
    }

    Ok(HttpResponse::Ok().json(entries))
}
