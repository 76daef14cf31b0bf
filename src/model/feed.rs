use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct FeedPost {
    pub id: u64,
    pub title: String,
    pub comments: String,
    pub photo_url: String,
    pub user_id: u64,
    pub username: String,
    pub brand: String,
    pub position: String,
    pub time_ago: Option<String>,
    pub description: String,
    pub image_url: String,
    pub cheers: Option<i32>,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
