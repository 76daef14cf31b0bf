use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1000)]
    pub user_id: u64,
    #[schema(example = "sick")]
    pub leave_type: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(nullable = true)]
    pub comments: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
