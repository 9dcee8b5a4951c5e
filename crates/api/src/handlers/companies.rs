//! Handlers for the `/companies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use biztime_core::error::CoreError;
use biztime_db::models::company::{CreateCompany, UpdateCompany};
use biztime_db::repositories::CompanyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::company::CompanyByCode;
use crate::response::{CompaniesResponse, CompanyResponse, DeletedResponse};
use crate::state::AppState;

/// GET /companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CompaniesResponse>> {
    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{code}
pub async fn get_by_code(CompanyByCode(company): CompanyByCode) -> Json<CompanyResponse> {
    Json(CompanyResponse { company })
}

/// POST /companies
///
/// `code`, `name` and `description` must all be present and non-empty.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCompany>,
) -> AppResult<(StatusCode, Json<CompanyResponse>)> {
    input.validate()?;

    let company = CompanyRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            taken_or_database(err, input.code.as_deref(), input.name.as_deref())
        })?;

    tracing::info!(code = %company.code, "Company created");
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/{code}
///
/// Replaces `name` and `description`; the code itself never changes.
pub async fn update(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
    AppJson(input): AppJson<UpdateCompany>,
) -> AppResult<Json<CompanyResponse>> {
    input.validate()?;

    let company = CompanyRepo::update(&state.pool, &code, &input)
        .await
        .map_err(|err| taken_or_database(err, Some(code.as_str()), input.name.as_deref()))?
        .ok_or_else(|| CoreError::not_found("Company", &code))?;

    tracing::info!(code = %company.code, "Company updated");
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
///
/// Invoices referencing the company are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> AppResult<Json<DeletedResponse>> {
    if !CompanyRepo::delete(&state.pool, &code).await? {
        return Err(CoreError::not_found("Company", &code).into());
    }

    tracing::info!(%code, "Company deleted");
    Ok(Json(DeletedResponse::new()))
}

/// Turn a unique violation on `companies` into a 400 naming the taken value.
///
/// Violations of any other constraint stay database errors.
fn taken_or_database(err: sqlx::Error, code: Option<&str>, name: Option<&str>) -> AppError {
    let constraint = biztime_db::unique_violation_constraint(&err).map(str::to_owned);

    match taken_message(constraint.as_deref(), code, name) {
        Some(message) => AppError::BadRequest(message),
        None => AppError::Database(err),
    }
}

fn taken_message(
    constraint: Option<&str>,
    code: Option<&str>,
    name: Option<&str>,
) -> Option<String> {
    match constraint? {
        CompanyRepo::CODE_CONSTRAINT => Some(format!(
            "Company code '{}' is already taken",
            code.unwrap_or_default()
        )),
        CompanyRepo::NAME_CONSTRAINT => Some(format!(
            "Company name '{}' is already taken",
            name.unwrap_or_default()
        )),
        _ => None,
    }
}
