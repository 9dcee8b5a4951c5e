//! Response envelopes.
//!
//! Every successful body wraps its payload under a key naming the resource
//! (`{"company": ...}`, `{"invoices": [...]}`), or is a deletion
//! acknowledgment.

use biztime_db::models::company::{Company, CompanySummary};
use biztime_db::models::invoice::InvoiceSummary;
use serde::Serialize;

/// `{ "company": {...} }`
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

/// `{ "companies": [{code, name}, ...] }`
#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

/// `{ "invoice": {...} }`
///
/// Generic so the same envelope carries either a flat invoice row or one
/// with its company nested.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T: Serialize> {
    pub invoice: T,
}

/// `{ "invoices": [{id, comp_code}, ...] }`
#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

/// `{ "status": "deleted" }`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
