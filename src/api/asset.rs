use crate::{
    db::{ConstraintViolation, constraint_violation},
    error::ApiError,
    model::asset::{Asset, UserAsset},
    utils::validation::required,
};
use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllotAsset {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = 42)]
    pub asset_id: Option<u64>,
}

/// Hand an asset to a user unless it is still out with someone
#[utoipa::path(
    post,
    path = "/asset/allot",
    request_body = AllotAsset,
    responses(
        (status = 201, description = "Asset allotted", body = Object, example = json!({
            "message": "Asset allotted successfully"
        })),
        (status = 400, description = "Asset already allotted, or unknown user/asset", body = Object, example = json!({
            "message": "Asset is already allotted"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assets"
)]
pub async fn allot_asset(
    pool: web::Data<MySqlPool>,
    payload: web::Json<AllotAsset>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let user_id = required(payload.user_id, "userId and assetId are required")?;
    let asset_id = required(payload.asset_id, "userId and assetId are required")?;
    let today = Utc::now().date_naive();

    // the availability check and the insert are one statement
    let result = sqlx::query(
        r#"
        INSERT INTO asset_allotment (user_id, asset_id, allotment_date)
        SELECT ?, ?, ?
        FROM DUAL
        WHERE NOT EXISTS (
            SELECT 1 FROM asset_allotment
            WHERE asset_id = ? AND return_date IS NULL
        )
        "#,
    )
    .bind(user_id)
    .bind(asset_id)
    .bind(today)
    .bind(asset_id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            Err(ApiError::bad_request("Asset is already allotted").into())
        }
        Ok(_) => {
            info!(user_id, asset_id, "Asset allotted");
            Ok(HttpResponse::Created().json(json!({
                "message": "Asset allotted successfully"
            })))
        }
        Err(e) if constraint_violation(&e) == Some(ConstraintViolation::MissingReference) => {
            Err(ApiError::bad_request("User or asset does not exist").into())
        }
        Err(e) => {
            error!(error = %e, user_id, asset_id, "Asset allotment failed");
            Err(ApiError::Internal.into())
        }
    }
}

/// Assets held by a user, with overdue computed for today
#[utoipa::path(
    get,
    path = "/user/{userId}/assets",
    params(
        ("userId" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Allotted assets", body = [UserAsset]),
        (status = 404, description = "No assets found for this user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assets"
)]
pub async fn user_assets(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();

    let rows = sqlx::query_as::<_, UserAsset>(
        r#"
        SELECT aa.id AS allotment_id, a.product, a.asset_type, a.serial_number, a.asset_code,
               aa.allotment_date, aa.return_date, aa.acknowledge, aa.overdue
        FROM asset_allotment aa
        JOIN assets a ON aa.asset_id = a.id
        WHERE aa.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch user assets"))?;

    if rows.is_empty() {
        return Err(ApiError::not_found("No assets found for this user").into());
    }

    let today = Utc::now().date_naive();
    let assets: Vec<UserAsset> = rows.into_iter().map(|a| a.with_overdue(today)).collect();

    Ok(HttpResponse::Ok().json(assets))
}

/// Asset inventory
#[utoipa::path(
    get,
    path = "/assets",
    responses(
        (status = 200, description = "All assets", body = [Asset]),
        (status = 404, description = "No assets found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assets"
)]
pub async fn all_assets(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let assets = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY id")
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to fetch assets"))?;

    if assets.is_empty() {
        return Err(ApiError::not_found("No assets found").into());
    }

    Ok(HttpResponse::Ok().json(assets))
}
