use crate::{
    error::ApiError,
    model::employee::Employee,
    utils::{
        db_utils::{fetch_inserted, user_exists},
        validation::required,
    },
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = 12)]
    pub user_id: Option<u64>,
    #[schema(example = "EMP-001")]
    pub emp_code: Option<String>,
    #[schema(example = "1994-05-17", format = "date", value_type = String)]
    pub dob: Option<NaiveDate>,
    #[schema(example = "female")]
    pub gender: Option<String>,
    #[schema(example = "O+")]
    pub blood_group: Option<String>,
    #[schema(example = "Indian")]
    pub nationality: Option<String>,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date_of_joining: Option<NaiveDate>,
    #[schema(example = "Acme")]
    pub company: Option<String>,
    pub reporting_manager: Option<String>,
    pub functional_manager: Option<String>,
    #[schema(example = "2024-06-30", format = "date", value_type = String)]
    pub date_of_completion: Option<NaiveDate>,
}

const ALL_FIELDS: &str = "All fields are required";

/// Create an employee record for an existing user
#[utoipa::path(
    post,
    path = "/add_new_employee",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Object, example = json!({
            "message": "Employee details added successfully",
            "employee": {}
        })),
        (status = 400, description = "Missing fields or unknown user", body = Object, example = json!({
            "message": "User does not exist"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let p = payload.into_inner();

    let user_id = required(p.user_id, ALL_FIELDS)?;
    let emp_code = required(p.emp_code, ALL_FIELDS)?;
    let dob = required(p.dob, ALL_FIELDS)?;
    let gender = required(p.gender, ALL_FIELDS)?;
    let blood_group = required(p.blood_group, ALL_FIELDS)?;
    let nationality = required(p.nationality, ALL_FIELDS)?;
    let date_of_joining = required(p.date_of_joining, ALL_FIELDS)?;
    let company = required(p.company, ALL_FIELDS)?;
    let reporting_manager = required(p.reporting_manager, ALL_FIELDS)?;
    let functional_manager = required(p.functional_manager, ALL_FIELDS)?;
    let date_of_completion = required(p.date_of_completion, ALL_FIELDS)?;

    if !user_exists(pool.get_ref(), user_id)
        .await
        .map_err(ApiError::database("Failed to check user before adding employee"))?
    {
        return Err(ApiError::bad_request("User does not exist").into());
    }

    let result = sqlx::query(
        r#"
        INSERT INTO new_employee
            (user_id, emp_code, dob, gender, blood_group, nationality, date_of_joining,
             company, reporting_manager, functional_manager, date_of_completion)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&emp_code)
    .bind(dob)
    .bind(&gender)
    .bind(&blood_group)
    .bind(&nationality)
    .bind(date_of_joining)
    .bind(&company)
    .bind(&reporting_manager)
    .bind(&functional_manager)
    .bind(date_of_completion)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to add employee details"))?;

    let employee: Employee = fetch_inserted(pool.get_ref(), "new_employee", result.last_insert_id())
        .await
        .map_err(ApiError::database("Failed to read back employee"))?;

    info!(user_id, emp_code = %employee.emp_code, "Employee added");

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee details added successfully",
        "employee": employee
    })))
}

/// All employee records
#[utoipa::path(
    get,
    path = "/new_employees",
    responses(
        (status = 200, description = "Employees", body = [Employee]),
        (status = 404, description = "No new employees found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<MySqlPool>) -> actix_web::Result<impl Responder> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM new_employee ORDER BY id")
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::database("Failed to fetch new employees"))?;

    if employees.is_empty() {
        return Err(ApiError::not_found("No new employees found").into());
    }

    Ok(HttpResponse::Ok().json(employees))
}

/// Employee record of a user
#[utoipa::path(
    get,
    path = "/new_employee/{id}",
    params(
        ("id" = u64, Path, description = "User ID the employee record belongs to")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>(
        "SELECT * FROM new_employee WHERE user_id = ? ORDER BY id LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::database("Failed to fetch employee"))?
    .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    Ok(HttpResponse::Ok().json(employee))
}
