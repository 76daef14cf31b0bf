use crate::{error::ApiError, model::user::User};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::MySqlPool;
use tracing::debug;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Substring match on the user's name
    pub name: Option<String>,
    /// Substring match on the user's email
    pub email: Option<String>,
}

/// List users, optionally filtered by name and email
#[utoipa::path(
    get,
    path = "/users",
    params(UserFilter),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(
    pool: web::Data<MySqlPool>,
    query: web::Query<UserFilter>,
) -> actix_web::Result<impl Responder> {
    let mut conditions = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(name) = query.name.as_deref().filter(|n| !n.is_empty()) {
        conditions.push("name LIKE ?");
        args.push(format!("%{}%", name));
    }

    if let Some(email) = query.email.as_deref().filter(|e| !e.is_empty()) {
        conditions.push("email LIKE ?");
        args.push(format!("%{}%", email));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let sql = format!("SELECT id, name, email FROM users{} ORDER BY id", where_clause);
    debug!(sql = %sql, "Listing users");

    let mut data_q = sqlx::query_as::<_, User>(&sql);
    for arg in args {
        data_q = data_q.bind(arg);
    }

    let users = data_q
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to list users"))?;

    Ok(HttpResponse::Ok().json(users))
}

/// Get one user
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = Object, example = json!({
            "message": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();

    let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to fetch user"))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(user))
}
