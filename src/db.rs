use sqlx::MySqlPool;
use sqlx::mysql::{MySqlDatabaseError, MySqlPoolOptions};

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Integrity constraint failures (SQLSTATE 23000), told apart by MySQL error number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// 1062 / 1586: a unique key already holds the value
    DuplicateKey,
    /// 1216 / 1452: a foreign key points at a missing parent row
    MissingReference,
    Other,
}

impl ConstraintViolation {
    pub fn from_error_number(number: u16) -> Self {
        match number {
            1062 | 1586 => ConstraintViolation::DuplicateKey,
            1216 | 1452 => ConstraintViolation::MissingReference,
            _ => ConstraintViolation::Other,
        }
    }
}

/// `None` unless `err` is a MySQL integrity constraint violation
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    if db_err.code().as_deref() != Some("23000") {
        return None;
    }

    Some(
        db_err
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(|e| ConstraintViolation::from_error_number(e.number()))
            .unwrap_or(ConstraintViolation::Other),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_entry_numbers() {
        assert_eq!(ConstraintViolation::from_error_number(1062), ConstraintViolation::DuplicateKey);
        assert_eq!(ConstraintViolation::from_error_number(1586), ConstraintViolation::DuplicateKey);
    }

    #[test]
    fn missing_parent_numbers() {
        assert_eq!(
            ConstraintViolation::from_error_number(1452),
            ConstraintViolation::MissingReference
        );
        assert_eq!(
            ConstraintViolation::from_error_number(1216),
            ConstraintViolation::MissingReference
        );
    }

    #[test]
    fn other_23000_numbers_are_not_guessed() {
        // 1048: column cannot be null
        assert_eq!(ConstraintViolation::from_error_number(1048), ConstraintViolation::Other);
    }

    #[test]
    fn non_database_errors_are_not_violations() {
        assert_eq!(constraint_violation(&sqlx::Error::RowNotFound), None);
    }
}
