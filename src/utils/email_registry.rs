use anyhow::{Result, anyhow};
use autoscale_cuckoo_filter::CuckooFilter;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use moka::future::Cache;
use once_cell::sync::Lazy;
use sqlx::MySqlPool;
use std::sync::RwLock;
use std::time::Duration;

const FILTER_CAPACITY: usize = 100_000;
const FALSE_POSITIVE_RATE: f64 = 0.001;

/// Every registered email. A miss means the email is definitely unregistered.
static REGISTERED: Lazy<RwLock<CuckooFilter<String>>> =
    Lazy::new(|| RwLock::new(CuckooFilter::new(FILTER_CAPACITY, FALSE_POSITIVE_RATE)));

/// Normalized email -> user id of accounts that registered or logged in lately
static ACCOUNTS: Lazy<Cache<String, u64>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(500_000)
        .time_to_idle(Duration::from_secs(86400))
        .build()
});

/// Emails are compared trimmed and lowercased everywhere
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The filter has never seen the email
    Unregistered,
    Registered(u64),
    /// Possibly registered; only the database can tell
    Unknown,
}

/// Answer from memory where possible. `Unregistered` is only trustworthy once
/// the startup warmup has finished; callers whose answer cannot be corrected
/// by a unique key should treat it like `Unknown`.
pub async fn lookup(email: &str) -> Lookup {
    let email = normalize(email);

    // a poisoned lock answers "maybe"
    let maybe = REGISTERED
        .read()
        .map(|filter| filter.contains(&email))
        .unwrap_or(true);
    if !maybe {
        return Lookup::Unregistered;
    }

    match ACCOUNTS.get(&email).await {
        Some(user_id) => Lookup::Registered(user_id),
        None => Lookup::Unknown,
    }
}

/// Record an account confirmed by the database
pub async fn remember(email: &str, user_id: u64) {
    let email = normalize(email);

    if let Ok(mut filter) = REGISTERED.write() {
        if !filter.contains(&email) {
            filter.add(&email);
        }
    }

    ACCOUNTS.insert(email, user_id).await;
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: u64,
    email: String,
    last_login_at: Option<DateTime<Utc>>,
}

/// One pass over `users`: every email goes into the filter, accounts that
/// logged in during the last `recent_days` days also go into the id cache.
pub async fn warmup(pool: &MySqlPool, recent_days: i64, batch_size: usize) -> Result<()> {
    let recent_since = Utc::now() - chrono::Duration::days(recent_days);

    let mut chunks = sqlx::query_as::<_, AccountRow>("SELECT id, email, last_login_at FROM users")
        .fetch(pool)
        .try_chunks(batch_size.max(1));

    let (mut filtered, mut cached) = (0usize, 0usize);

    while let Some(chunk) = chunks.try_next().await.map_err(|e| e.1)? {
        {
            let mut filter = REGISTERED
                .write()
                .map_err(|_| anyhow!("email filter poisoned"))?;
            for row in &chunk {
                filter.add(&normalize(&row.email));
            }
        }
        filtered += chunk.len();

        let recent: Vec<_> = chunk
            .into_iter()
            .filter(|row| row.last_login_at.is_some_and(|at| at >= recent_since))
            .collect();
        cached += recent.len();

        futures::future::join_all(
            recent
                .into_iter()
                .map(|row| ACCOUNTS.insert(normalize(&row.email), row.id)),
        )
        .await;
    }

    log::info!(
        "Email registry warmup complete: {} emails filtered, {} recent accounts cached",
        filtered,
        cached
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Jane@Corp.IO "), "jane@corp.io");
    }

    #[actix_web::test]
    async fn remembered_account_resolves_to_its_id() {
        remember("Registry.Test@Example.com", 42).await;

        assert_eq!(lookup(" registry.test@example.com").await, Lookup::Registered(42));
    }

    #[actix_web::test]
    async fn never_seen_email_is_unregistered() {
        assert_eq!(
            lookup("nobody-registered-here@example.com").await,
            Lookup::Unregistered
        );
    }
}
