use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Asset {
    pub id: u64,
    #[schema(example = "ThinkPad T14")]
    pub product: String,
    #[schema(example = "laptop")]
    pub asset_type: String,
    pub serial_number: String,
    #[schema(example = "AST-0042")]
    pub asset_code: String,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// One asset handed to a user, joined with the asset details
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct UserAsset {
    pub allotment_id: u64,
    pub product: String,
    pub asset_type: String,
    pub serial_number: String,
    pub asset_code: String,
    #[schema(format = "date", value_type = String)]
    pub allotment_date: NaiveDate,
    #[schema(format = "date", value_type = String, nullable = true)]
    pub return_date: Option<NaiveDate>,
    pub acknowledge: bool,
    pub overdue: bool,
}

impl UserAsset {
    /// An unacknowledged allotment whose return date has passed is overdue.
    /// The result only lives in the response; the stored flag is untouched.
    pub fn with_overdue(mut self, today: NaiveDate) -> Self {
        if !self.acknowledge {
            if let Some(return_date) = self.return_date {
                if today > return_date {
                    self.overdue = true;
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allotment(return_date: Option<NaiveDate>, acknowledge: bool) -> UserAsset {
        UserAsset {
            allotment_id: 1,
            product: "Monitor".into(),
            asset_type: "display".into(),
            serial_number: "SN-1".into(),
            asset_code: "AST-1".into(),
            allotment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            return_date,
            acknowledge,
            overdue: false,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn unacknowledged_past_return_date_is_overdue() {
        assert!(allotment(Some(day(10)), false).with_overdue(day(11)).overdue);
    }

    #[test]
    fn return_date_today_is_not_overdue() {
        assert!(!allotment(Some(day(10)), false).with_overdue(day(10)).overdue);
    }

    #[test]
    fn acknowledged_allotment_is_never_marked() {
        assert!(!allotment(Some(day(1)), true).with_overdue(day(20)).overdue);
    }

    #[test]
    fn missing_return_date_is_not_overdue() {
        assert!(!allotment(None, false).with_overdue(day(20)).overdue);
    }
}
