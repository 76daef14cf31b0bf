use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to be excused from the office for official work elsewhere
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct OnDutyRequest {
    pub id: u64,
    pub user_id: u64,
    pub reason: Option<String>,
    #[schema(format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub start_hours: Option<i32>,
    pub start_minutes: Option<i32>,
    pub end_hours: Option<i32>,
    pub end_minutes: Option<i32>,
    pub comments: Option<String>,
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
