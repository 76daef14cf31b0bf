use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Ticket {
    pub id: u64,
    #[schema(example = "IT")]
    pub category: String,
    #[schema(example = "Laptop")]
    pub subcategory: String,
    #[schema(example = "High")]
    pub priority: String,
    pub description: String,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
