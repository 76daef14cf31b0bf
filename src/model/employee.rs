use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Onboarding record of an employee, keyed by the owning user
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "user_id": 12,
        "emp_code": "EMP-001",
        "dob": "1994-05-17",
        "gender": "female",
        "blood_group": "O+",
        "nationality": "Indian",
        "date_of_joining": "2024-01-01",
        "company": "Acme",
        "reporting_manager": "John Roe",
        "functional_manager": "Ann Poe",
        "date_of_completion": "2024-06-30",
        "created_at": "2024-01-01T00:00:00Z"
    })
)]
pub struct Employee {
    pub id: u64,
    pub user_id: u64,
    pub emp_code: String,
    #[schema(format = "date", value_type = String)]
    pub dob: NaiveDate,
    pub gender: String,
    pub blood_group: String,
    pub nationality: String,
    #[schema(format = "date", value_type = String)]
    pub date_of_joining: NaiveDate,
    pub company: String,
    pub reporting_manager: String,
    pub functional_manager: String,
    #[schema(format = "date", value_type = String)]
    pub date_of_completion: NaiveDate,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// Whole years between `since` and `today`
pub fn full_years(since: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years -= 1;
    }
    years
}

fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Greeting for an employee whose joining anniversary is today
pub fn anniversary_message(emp_code: &str, joined: NaiveDate, today: NaiveDate) -> Option<String> {
    let years = full_years(joined, today);
    if same_month_day(joined, today) && years > 0 {
        Some(format!(
            "Congratulations {emp_code}, you have {years} year(s) of service today!"
        ))
    } else {
        None
    }
}

pub fn birthday_message(name: &str) -> String {
    format!("Today is {name}'s birthday")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_years_counts_completed_years_only() {
        assert_eq!(full_years(date(2020, 6, 15), date(2024, 6, 14)), 3);
        assert_eq!(full_years(date(2020, 6, 15), date(2024, 6, 15)), 4);
    }

    #[test]
    fn anniversary_on_matching_day() {
        let msg = anniversary_message("EMP-7", date(2021, 3, 2), date(2024, 3, 2)).unwrap();
        assert_eq!(msg, "Congratulations EMP-7, you have 3 year(s) of service today!");
    }

    #[test]
    fn joining_day_itself_is_not_an_anniversary() {
        assert!(anniversary_message("EMP-7", date(2024, 3, 2), date(2024, 3, 2)).is_none());
        assert!(anniversary_message("EMP-7", date(2021, 3, 2), date(2024, 3, 3)).is_none());
    }

    #[test]
    fn birthday_message_names_the_person() {
        assert_eq!(birthday_message("Jane"), "Today is Jane's birthday");
    }
}
