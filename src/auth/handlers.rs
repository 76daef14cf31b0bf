use crate::{
    auth::{
        jwt::{generate_access_token, generate_reset_token},
        password::{hash_password, verify_password},
    },
    config::Config,
    db::{ConstraintViolation, constraint_violation},
    error::ApiError,
    models::{ForgotPasswordReq, LoginReqDto, RegisterReq, UserSql},
    utils::{
        email_registry::{self, Lookup},
        validation::{required, required_text},
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info, instrument};
use utoipa::ToSchema;

/// Id of the account registered under `email`, from the registry cache or
/// the database. A database hit is remembered for next time.
async fn account_id(email: &str, pool: &MySqlPool) -> Result<Option<u64>, ApiError> {
    if let Lookup::Registered(user_id) = email_registry::lookup(email).await {
        return Ok(Some(user_id));
    }

    let user_id = sqlx::query_scalar::<_, u64>("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::database("Failed to look up account by email"))?;

    if let Some(user_id) = user_id {
        email_registry::remember(email, user_id).await;
    }

    Ok(user_id)
}

/// A filter miss is trusted here: a stale answer is still caught by the
/// unique key on `users.email` at insert time.
pub async fn is_email_available(email: &str, pool: &MySqlPool) -> Result<bool, ApiError> {
    if email_registry::lookup(email).await == Lookup::Unregistered {
        return Ok(true);
    }

    Ok(account_id(email, pool).await?.is_none())
}

async fn insert_user(
    name: &str,
    email: &str,
    password: &str,
    leave_balance: i32,
    pool: &MySqlPool,
) -> Result<u64, ApiError> {
    let hashed = hash_password(password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        ApiError::Internal
    })?;

    let result = sqlx::query(
        r#"INSERT INTO users (name, email, password, leave_balance) VALUES (?, ?, ?, ?)"#,
    )
    .bind(name)
    .bind(email)
    .bind(hashed)
    .bind(leave_balance)
    .execute(pool)
    .await;

    match result {
        Ok(done) => {
            let user_id = done.last_insert_id();
            email_registry::remember(email, user_id).await;
            Ok(user_id)
        }
        // unique key on users.email catches the concurrent-registration race
        Err(e) if constraint_violation(&e) == Some(ConstraintViolation::DuplicateKey) => {
            Err(ApiError::bad_request("Email already exists"))
        }
        Err(e) => Err(ApiError::database("Failed to register user")(e)),
    }
}

/// User registration
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User registered", body = Object, example = json!({
            "message": "User registered successfully"
        })),
        (status = 400, description = "Validation failed, passwords differ or email taken", body = Object, example = json!({
            "message": "Passwords do not match"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip_all)]
pub async fn register(
    user: web::Json<RegisterReq>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let user = user.into_inner();

    let name = required_text(user.name, "Name is required")?;
    let email = email_registry::normalize(&required_text(user.email, "Email is required")?);
    let password = required(user.password, "Password is required")?;
    let confirm_password = required(user.confirm_password, "Confirm password is required")?;

    if password.is_empty() {
        return Err(ApiError::bad_request("Password is required").into());
    }

    if password != confirm_password {
        return Err(ApiError::bad_request("Passwords do not match").into());
    }

    if !is_email_available(&email, pool.get_ref()).await? {
        info!("Registration rejected: email already exists");
        return Err(ApiError::bad_request("Email already exists").into());
    }

    let user_id = insert_user(
        &name,
        &email,
        &password,
        config.default_leave_balance,
        pool.get_ref(),
    )
    .await?;

    info!(user_id, "User registered");

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully"
    })))
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    token: String,
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Bearer token issued", body = LoginResponse),
        (status = 400, description = "Invalid email or password", body = Object, example = json!({
            "message": "Invalid email or password"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip_all)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    info!("Login request received");

    let user = user.into_inner();
    let email = email_registry::normalize(&required_text(user.email, "Email and password are required")?);
    let password = required(user.password, "Email and password are required")?;

    debug!("Fetching user from database");

    let db_user = sqlx::query_as::<_, UserSql>(
        r#"
        SELECT id, email, password
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(&email)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::database("Database error while fetching user"))?;

    let db_user = match db_user {
        Some(u) => u,
        None => {
            info!("Invalid credentials: user not found");
            return Err(ApiError::bad_request("Invalid email or password").into());
        }
    };

    if let Err(e) = verify_password(&password, &db_user.password) {
        info!(error = %e, user_id = db_user.id, "Invalid credentials: password mismatch");
        return Err(ApiError::bad_request("Invalid email or password").into());
    }

    let token = generate_access_token(
        db_user.id,
        db_user.email.clone(),
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign access token");
        ApiError::Internal
    })?;

    // non-fatal: only feeds the email cache warmup
    if let Err(e) = sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = ?")
        .bind(db_user.id)
        .execute(pool.get_ref())
        .await
    {
        error!(error = %e, "Failed to update last_login_at");
    }

    email_registry::remember(&db_user.email, db_user.id).await;

    info!(user_id = db_user.id, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// Issue a password reset token
#[utoipa::path(
    post,
    path = "/forgot-password",
    request_body = ForgotPasswordReq,
    responses(
        (status = 200, description = "Reset token issued", body = Object, example = json!({
            "message": "Password reset token has been sent to your email"
        })),
        (status = 400, description = "User does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_forgot_password", skip_all)]
pub async fn forgot_password(
    payload: web::Json<ForgotPasswordReq>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let email = email_registry::normalize(&required_text(
        payload.into_inner().email,
        "Email is required",
    )?);

    // a filter miss is not trusted: before warmup ends it can hide real accounts
    let user_id = account_id(&email, pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::bad_request("User does not exist"))?;

    let reset_token = generate_reset_token(
        user_id,
        email,
        &config.jwt_secret,
        config.reset_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign reset token");
        ApiError::Internal
    })?;

    // no mail transport yet; the token only reaches the debug log
    debug!(user_id, token = %reset_token, "Password reset token issued");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Password reset token has been sent to your email"
    })))
}
