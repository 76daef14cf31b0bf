use crate::{
    error::ApiError,
    model::referral::Referral,
    utils::{
        db_utils::{fetch_all_newest_first, fetch_inserted},
        validation::required,
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateReferral {
    #[schema(example = "Sam Lee")]
    pub candidate_name: Option<String>,
    pub gender: Option<String>,
    #[schema(example = "sam@mail.com")]
    pub email: Option<String>,
    #[schema(example = "+91")]
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub comments: Option<String>,
    pub portfolio_url: Option<String>,
}

const REQUIRED: &str =
    "Candidate name, gender, email, country code, and phone number are required";

/// Refer a candidate
#[utoipa::path(
    post,
    path = "/referral",
    request_body = CreateReferral,
    responses(
        (status = 201, description = "Referral stored", body = Object, example = json!({
            "message": "Referral added successfully",
            "referral": {}
        })),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Referral"
)]
pub async fn add_referral(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateReferral>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();

    let candidate_name = required(p.candidate_name, REQUIRED)?;
    let gender = required(p.gender, REQUIRED)?;
    let email = required(p.email, REQUIRED)?;
    let country_code = required(p.country_code, REQUIRED)?;
    let phone_number = required(p.phone_number, REQUIRED)?;

    let result = sqlx::query(
        r#"
        INSERT INTO referrals
            (candidate_name, gender, email, country_code, phone_number, comments, portfolio_url)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&candidate_name)
    .bind(&gender)
    .bind(&email)
    .bind(&country_code)
    .bind(&phone_number)
    .bind(&p.comments)
    .bind(&p.portfolio_url)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to add referral"))?;

    let referral: Referral = fetch_inserted(pool.get_ref(), "referrals", result.last_insert_id())
        .await
        .map_err(ApiError::database("Failed to read back referral"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Referral added successfully",
        "referral": referral
    })))
}

#[utoipa::path(
    get,
    path = "/referrals",
    responses(
        (status = 200, description = "Referrals, newest first", body = [Referral]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Referral"
)]
pub async fn all_referrals(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let referrals: Vec<Referral> = fetch_all_newest_first(pool.get_ref(), "referrals")
        .await
        .map_err(ApiError::database("Failed to fetch referrals"))?;

    Ok(HttpResponse::Ok().json(referrals))
}
