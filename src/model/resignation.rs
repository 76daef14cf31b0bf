use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOTICE_PERIOD_DAYS: u32 = 90;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ResignationRequest {
    pub id: u64,
    pub user_id: u64,
    #[schema(format = "date", value_type = String)]
    pub request_date: NaiveDate,
    #[schema(example = 90)]
    pub notice_period: i32,
    /// last working day, derived from the notice period
    #[schema(format = "date", value_type = String)]
    pub lwd: NaiveDate,
    #[schema(format = "date", value_type = String, nullable = true)]
    pub proposed_lwd: Option<NaiveDate>,
    pub reason: Option<String>,
    pub comments: Option<String>,
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

pub fn last_working_day(request_date: NaiveDate, notice_days: u32) -> Option<NaiveDate> {
    request_date.checked_add_days(Days::new(u64::from(notice_days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_period_crosses_month_boundaries() {
        let request = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            last_working_day(request, NOTICE_PERIOD_DAYS),
            NaiveDate::from_ymd_opt(2024, 4, 14)
        );
    }
}
