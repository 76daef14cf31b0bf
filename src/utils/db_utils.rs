use sqlx::{FromRow, MySqlPool, mysql::MySqlRow};

/// MySQL has no `INSERT ... RETURNING`; re-read the row by its generated id.
/// `table` is always a compile-time constant from the calling handler.
pub async fn fetch_inserted<T>(pool: &MySqlPool, table: &str, id: u64) -> Result<T, sqlx::Error>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} WHERE id = ?", table);
    sqlx::query_as::<_, T>(&sql).bind(id).fetch_one(pool).await
}

/// Every row of `table`, newest first
pub async fn fetch_all_newest_first<T>(pool: &MySqlPool, table: &str) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} ORDER BY created_at DESC, id DESC", table);
    sqlx::query_as::<_, T>(&sql).fetch_all(pool).await
}

pub async fn user_exists(pool: &MySqlPool, user_id: u64) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(exists != 0)
}
