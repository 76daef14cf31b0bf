use crate::{
    error::ApiError,
    model::core_value::CoreValue,
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
pub struct CreateCoreValue {
    #[schema(example = "Ownership")]
    pub title: Option<String>,
    #[schema(example = "We finish what we start")]
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/core-values",
    request_body = CreateCoreValue,
    responses(
        (status = 201, description = "Core value stored", body = Object, example = json!({
            "message": "Core value added successfully",
            "coreValue": {}
        })),
        (status = 400, description = "Title and description are required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Company"
)]
pub async fn add_core_value(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateCoreValue>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let title = required(p.title, "Title and description are required")?;
    let description = required(p.description, "Title and description are required")?;

    let result = sqlx::query("INSERT INTO core_values (title, description) VALUES (?, ?)")
        .bind(&title)
        .bind(&description)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to add core value"))?;

    let core_value: CoreValue =
        fetch_inserted(pool.get_ref(), "core_values", result.last_insert_id())
            .await
            .map_err(ApiError::database("Failed to read back core value"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Core value added successfully",
        "coreValue": core_value
    })))
}

#[utoipa::path(
    get,
    path = "/core-values",
    responses(
        (status = 200, description = "Core values, newest first", body = [CoreValue]),
        (status = 404, description = "No core values found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Company"
)]
pub async fn all_core_values(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let values: Vec<CoreValue> = fetch_all_newest_first(pool.get_ref(), "core_values")
        .await
        .map_err(ApiError::database("Failed to fetch core values"))?;

    if values.is_empty() {
        return Err(ApiError::not_found("No core values found").into());
    }

    Ok(HttpResponse::Ok().json(values))
}
