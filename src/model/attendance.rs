use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shifts longer than this many hours are flagged
pub const OVERTIME_THRESHOLD_HOURS: f64 = 9.5;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: u64,
    pub user_id: u64,
    pub work_date: NaiveDate,
    pub punch_in_time: DateTime<Utc>,
    pub punch_out_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PunchTimes {
    #[schema(example = "2024-01-01T09:00:00Z", format = "date-time", value_type = String)]
    pub punch_in_time: DateTime<Utc>,
    #[schema(example = "2024-01-01T18:30:00Z", format = "date-time", value_type = String, nullable = true)]
    pub punch_out_time: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 (`2024-01-01T09:00:00Z`, `...+05:30`) or a naive
/// `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`, which is taken as UTC.
pub fn parse_punch_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Elapsed hours; negative when punch-out precedes punch-in
pub fn worked_hours(punch_in: DateTime<Utc>, punch_out: DateTime<Utc>) -> f64 {
    (punch_out - punch_in).num_milliseconds() as f64 / 3_600_000.0
}

pub fn is_overtime(punch_in: DateTime<Utc>, punch_out: DateTime<Utc>) -> bool {
    worked_hours(punch_in, punch_out) > OVERTIME_THRESHOLD_HOURS
}
