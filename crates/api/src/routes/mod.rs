pub mod companies;
pub mod health;
pub mod invoices;

use axum::http::Uri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /companies            list, create
/// /companies/{code}     get, update, delete
/// /invoices             list, create
/// /invoices/{id}        get, update, delete
/// ```
///
/// Anything else falls through to a JSON 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/invoices", invoices::router())
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
