use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct WallOfFameEntry {
    pub id: u64,
    #[schema(example = "https://cdn.example.com/badges/star.png")]
    pub badge_url: String,
    pub comment: String,
    pub user_id: u64,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time", value_type = String)]
    pub updated_at: DateTime<Utc>,
}
