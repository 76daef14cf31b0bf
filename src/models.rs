use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@company.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret!")]
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    #[schema(example = "s3cret!")]
    pub confirm_password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "jane@company.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret!")]
    pub password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordReq {
    #[schema(example = "jane@company.com")]
    pub email: Option<String>,
}

/// Credentials row used only by the login path
#[derive(FromRow)]
pub struct UserSql {
    pub id: u64,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    /// email of the token holder
    pub sub: String,
    pub exp: usize,
    pub jti: String,

    pub token_type: TokenType,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum TokenType {
    Access,
    PasswordReset,
}
