use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CoreValue {
    pub id: u64,
    #[schema(example = "Ownership")]
    pub title: String,
    pub description: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
