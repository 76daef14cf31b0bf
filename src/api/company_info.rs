use crate::{
    db::{ConstraintViolation, constraint_violation},
    error::ApiError,
    model::company_info::CompanyInfo,
    utils::validation::required,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpsertCompanyInfo {
    #[serde(rename = "type")]
    #[schema(example = "mission")]
    pub info_type: Option<String>,
    pub content: Option<String>,
}

async fn find_by_type(pool: &MySqlPool, info_type: &str) -> Result<Option<CompanyInfo>, ApiError> {
    sqlx::query_as::<_, CompanyInfo>("SELECT * FROM company_info WHERE type = ?")
        .bind(info_type)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::database("Failed to fetch company info"))
}

/// Create or replace the company text of a given type
#[utoipa::path(
    post,
    path = "/company-info",
    request_body = UpsertCompanyInfo,
    responses(
        (status = 201, description = "Company info added", body = Object, example = json!({
            "message": "Company info added successfully",
            "companyInfo": {}
        })),
        (status = 200, description = "Company info updated", body = Object, example = json!({
            "message": "Company info updated successfully",
            "companyInfo": {}
        })),
        (status = 400, description = "Type and content are required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Company"
)]
pub async fn upsert_company_info(
    pool: web::Data<MySqlPool>,
    payload: web::Json<UpsertCompanyInfo>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();
    let info_type = required(p.info_type, "Type and content are required")?;
    let content = required(p.content, "Type and content are required")?;

    // the unique key on `type` decides add versus update
    let created = match sqlx::query("INSERT INTO company_info (type, content) VALUES (?, ?)")
        .bind(&info_type)
        .bind(&content)
        .execute(pool.get_ref())
        .await
    {
        Ok(_) => true,
        Err(e) if constraint_violation(&e) == Some(ConstraintViolation::DuplicateKey) => {
            sqlx::query(
                "UPDATE company_info SET content = ?, updated_at = CURRENT_TIMESTAMP WHERE type = ?",
            )
            .bind(&content)
            .bind(&info_type)
            .execute(pool.get_ref())
            .await
            .map_err(ApiError::database("Failed to update company info"))?;
            false
        }
        Err(e) => return Err(ApiError::database("Failed to add company info")(e).into()),
    };

    let company_info = find_by_type(pool.get_ref(), &info_type)
        .await?
        .ok_or(ApiError::Internal)?;

    if created {
        Ok(HttpResponse::Created().json(json!({
            "message": "Company info added successfully",
            "companyInfo": company_info
        })))
    } else {
        Ok(HttpResponse::Ok().json(json!({
            "message": "Company info updated successfully",
            "companyInfo": company_info
        })))
    }
}

#[utoipa::path(
    get,
    path = "/company-info/{type}",
    params(
        ("type" = String, Path, description = "Info type, e.g. mission or vision")
    ),
    responses(
        (status = 200, description = "Company info", body = CompanyInfo),
        (status = 404, description = "Company info not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Company"
)]
pub async fn get_company_info(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let company_info = find_by_type(pool.get_ref(), &path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Company info not found"))?;

    Ok(HttpResponse::Ok().json(company_info))
}
