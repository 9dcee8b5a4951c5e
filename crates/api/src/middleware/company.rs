//! Company lookup extractor for company-scoped routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use biztime_core::error::CoreError;
use biztime_db::models::company::Company;
use biztime_db::repositories::CompanyRepo;

use crate::error::AppError;
use crate::extract::AppPath;
use crate::state::AppState;

/// A company resolved from the `{code}` path parameter.
///
/// Add it as a handler parameter to load the company before the handler
/// runs. When no row matches, the request short-circuits with a 404:
///
/// ```ignore
/// async fn show(CompanyByCode(company): CompanyByCode) -> Json<CompanyResponse> {
///     Json(CompanyResponse { company })
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CompanyByCode(pub Company);

impl FromRequestParts<AppState> for CompanyByCode {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AppPath(code) = AppPath::<String>::from_request_parts(parts, state).await?;

        let company = CompanyRepo::find_by_code(&state.pool, &code)
            .await?
            .ok_or_else(|| CoreError::not_found("Company", &code))?;

        Ok(CompanyByCode(company))
    }
}
