use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Free-form company text (mission, vision, ...) keyed by `type`
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CompanyInfo {
    pub id: u64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[schema(example = "mission")]
    pub info_type: String,
    pub content: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time", value_type = String)]
    pub updated_at: DateTime<Utc>,
}
