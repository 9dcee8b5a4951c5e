//! Handlers for the `/invoices` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use biztime_core::error::CoreError;
use biztime_core::types::DbId;
use biztime_db::models::invoice::{CreateInvoice, Invoice, InvoiceWithCompany, UpdateInvoice};
use biztime_db::repositories::{CompanyRepo, InvoiceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{DeletedResponse, InvoiceResponse, InvoicesResponse};
use crate::state::AppState;

/// GET /invoices
pub async fn list(State(state): State<AppState>) -> AppResult<Json<InvoicesResponse>> {
    let invoices = InvoiceRepo::list(&state.pool).await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/{id}
///
/// The invoice's company is loaded separately and nested in place of
/// `comp_code`.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<InvoiceResponse<InvoiceWithCompany>>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Invoice", id))?;

    // The row can vanish between the two reads if the company is deleted.
    let company = CompanyRepo::find_by_code(&state.pool, &invoice.comp_code)
        .await?
        .ok_or_else(|| CoreError::not_found("Invoice", id))?;

    Ok(Json(InvoiceResponse {
        invoice: InvoiceWithCompany::new(invoice, company),
    }))
}

/// POST /invoices
///
/// `comp_code` and `amt` are required; `paid` and `add_date` take database
/// defaults.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInvoice>,
) -> AppResult<(StatusCode, Json<InvoiceResponse<Invoice>>)> {
    input.validate()?;

    let invoice = InvoiceRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if biztime_db::is_foreign_key_violation(&err) {
                AppError::BadRequest(format!(
                    "Company '{}' does not exist",
                    input.comp_code.as_deref().unwrap_or_default()
                ))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");
    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/{id}
///
/// Only `amt` is updated.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateInvoice>,
) -> AppResult<Json<InvoiceResponse<Invoice>>> {
    input.validate()?;

    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Invoice", id))?;

    tracing::info!(id, amt = invoice.amt, "Invoice updated");
    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !InvoiceRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Invoice", id).into());
    }

    tracing::info!(id, "Invoice deleted");
    Ok(Json(DeletedResponse::new()))
}
