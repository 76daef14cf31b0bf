use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub access_token_ttl: usize,
    pub reset_token_ttl: usize,

    /// Leave days credited to a freshly registered user
    pub default_leave_balance: i32,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
    pub rate_api_per_min: u32,

    pub log_dir: String,
    pub log_level: String,
}

fn var_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .with_context(|| format!("{key} has an invalid value"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            db_max_connections: var_or("DB_MAX_CONNECTIONS", "10")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            access_token_ttl: var_or("ACCESS_TOKEN_TTL", "86400")?, // 24h
            reset_token_ttl: var_or("RESET_TOKEN_TTL", "3600")?,    // 1h
            default_leave_balance: var_or("DEFAULT_LEAVE_BALANCE", "12")?,

            rate_login_per_min: var_or("RATE_LOGIN_PER_MIN", "60")?,
            rate_register_per_min: var_or("RATE_REGISTER_PER_MIN", "30")?,
            rate_api_per_min: var_or("RATE_API_PER_MIN", "1000")?,

            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_vars_fall_back_to_defaults() {
        let ttl: usize = var_or("HR_PORTAL_UNSET_TTL_FOR_TEST", "900").unwrap();
        assert_eq!(ttl, 900);
    }

    #[test]
    fn invalid_numeric_default_is_an_error() {
        let parsed: Result<u32> = var_or("HR_PORTAL_UNSET_RATE_FOR_TEST", "lots");
        assert!(parsed.is_err());
    }
}
