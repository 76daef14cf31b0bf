use crate::{
    error::ApiError,
    model::feed::FeedPost,
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
pub struct CreatePost {
    #[schema(example = "Team offsite")]
    pub title: Option<String>,
    pub comments: Option<String>,
    pub photo_url: Option<String>,
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    pub username: Option<String>,
    pub brand: Option<String>,
    pub position: Option<String>,
    #[serde(rename = "timeAgo")]
    pub time_ago: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub cheers: Option<i32>,
}

const ALL_REQUIRED: &str = "All required fields must be provided";

/// Publish a post on the home feed
#[utoipa::path(
    post,
    path = "/add_post",
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post created", body = Object, example = json!({
            "message": "Post added successfully",
            "post": {}
        })),
        (status = 400, description = "All required fields must be provided"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feed"
)]
pub async fn add_post(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreatePost>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();

    let title = required(p.title, ALL_REQUIRED)?;
    let comments = required(p.comments, ALL_REQUIRED)?;
    let photo_url = required(p.photo_url, ALL_REQUIRED)?;
    let user_id = required(p.user_id, ALL_REQUIRED)?;
    let username = required(p.username, ALL_REQUIRED)?;
    let brand = required(p.brand, ALL_REQUIRED)?;
    let position = required(p.position, ALL_REQUIRED)?;
    let description = required(p.description, ALL_REQUIRED)?;
    let image_url = required(p.image_url, ALL_REQUIRED)?;

    let result = sqlx::query(
        r#"
        INSERT INTO feed
            (title, comments, photo_url, user_id, username, brand, position,
             time_ago, description, image_url, cheers)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&title)
    .bind(&comments)
    .bind(&photo_url)
    .bind(user_id)
    .bind(&username)
    .bind(&brand)
    .bind(&position)
    .bind(&p.time_ago)
    .bind(&description)
    .bind(&image_url)
    .bind(p.cheers)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to add post"))?;

    let post: FeedPost = fetch_inserted(pool.get_ref(), "feed", result.last_insert_id())
        .await
        .map_err(ApiError::database("Failed to read back post"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Post added successfully",
        "post": post
    })))
}

/// Whole feed, newest first
#[utoipa::path(
    get,
    path = "/getAll_feed",
    responses(
        (status = 200, description = "Feed posts", body = [FeedPost]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feed"
)]
pub async fn all_feeds(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let posts: Vec<FeedPost> = fetch_all_newest_first(pool.get_ref(), "feed")
        .await
        .map_err(ApiError::database("Failed to fetch feeds"))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Posts by one user
#[utoipa::path(
    get,
    path = "/feeds/user/{user_id}",
    params(
        ("user_id" = u64, Path, description = "Author user ID")
    ),
    responses(
        (status = 200, description = "Feed posts", body = [FeedPost]),
        (status = 404, description = "No feeds found for this user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feed"
)]
pub async fn feeds_by_user(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let posts = sqlx::query_as::<_, FeedPost>(
        "SELECT * FROM feed WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(path.into_inner())
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch feeds by user"))?;

    if posts.is_empty() {
        return Err(ApiError::not_found("No feeds found for this user").into());
    }

    Ok(HttpResponse::Ok().json(posts))
}
