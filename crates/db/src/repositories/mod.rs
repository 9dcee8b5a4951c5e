//! Repositories: one zero-sized struct per table, each exposing async
//! functions that take a pool and return `sqlx` results.

mod company_repo;
mod invoice_repo;

pub use company_repo::CompanyRepo;
pub use invoice_repo::InvoiceRepo;
