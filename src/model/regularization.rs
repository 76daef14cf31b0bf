use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to amend attendance after the fact. Times are hour/minute pairs.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Regularization {
    pub id: u64,
    pub user_id: u64,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = 9)]
    pub start_time: i32,
    pub start_time_minutes: Option<i32>,
    #[schema(example = 18)]
    pub end_time: i32,
    pub end_time_minutes: Option<i32>,
    pub comments: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
