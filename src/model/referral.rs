use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Referral {
    pub id: u64,
    #[schema(example = "Sam Lee")]
    pub candidate_name: String,
    pub gender: String,
    pub email: String,
    #[schema(example = "+91")]
    pub country_code: String,
    pub phone_number: String,
    pub comments: Option<String>,
    pub portfolio_url: Option<String>,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}
