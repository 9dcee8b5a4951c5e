//! Invoice entity model, DTOs and the single-invoice presentation shape.

use biztime_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::company::Company;

/// A full row from the `invoices` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

/// List projection of an invoice.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceSummary {
    pub id: DbId,
    pub comp_code: String,
}

/// An invoice with its company expanded inline.
///
/// The flat `comp_code` foreign key is replaced by the nested `company`.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceWithCompany {
    pub id: DbId,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
    pub company: Company,
}

impl InvoiceWithCompany {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// DTO for creating an invoice. `paid` and `add_date` take database defaults.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInvoice {
    #[validate(required, length(min = 1))]
    pub comp_code: Option<String>,
    #[validate(required)]
    pub amt: Option<f64>,
}

/// DTO for updating an invoice. Only the amount is mutable here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInvoice {
    #[validate(required)]
    pub amt: Option<f64>,
}
