use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user; the password hash never leaves the database layer
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@company.com")]
    pub email: String,
}
