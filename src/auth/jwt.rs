use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error as JwtError,
};
use uuid::Uuid;

use crate::models::{Claims, TokenType};

fn now() -> usize {
    Utc::now().timestamp().max(0) as usize
}

fn issue(
    user_id: u64,
    email: String,
    token_type: TokenType,
    secret: &str,
    ttl: usize,
) -> Result<String, JwtError> {
    let claims = Claims {
        user_id,
        sub: email,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
        token_type,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn generate_access_token(
    user_id: u64,
    email: String,
    secret: &str,
    ttl: usize,
) -> Result<String, JwtError> {
    issue(user_id, email, TokenType::Access, secret, ttl)
}

pub fn generate_reset_token(
    user_id: u64,
    email: String,
    secret: &str,
    ttl: usize,
) -> Result<String, JwtError> {
    issue(user_id, email, TokenType::PasswordReset, secret, ttl)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_round_trips_claims() {
        let token = generate_access_token(7, "jane@company.com".into(), SECRET, 60).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.sub, "jane@company.com");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.exp > now());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = generate_reset_token(7, "jane@company.com".into(), SECRET, 60).unwrap();
        assert!(verify_token(&token, "another-secret").is_err());
    }
}
