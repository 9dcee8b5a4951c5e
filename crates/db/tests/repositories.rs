//! Integration tests for the company and invoice repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create, fetch, update and delete for both tables
//! - Unique and foreign key violations
//! - Cascade from companies to invoices

use assert_matches::assert_matches;
use biztime_db::models::company::{CreateCompany, UpdateCompany};
use biztime_db::models::invoice::{CreateInvoice, UpdateInvoice};
use biztime_db::repositories::{CompanyRepo, InvoiceRepo};
use biztime_db::{is_foreign_key_violation, is_unique_violation, unique_violation_constraint};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_company(code: &str, name: &str) -> CreateCompany {
    CreateCompany {
        code: Some(code.to_string()),
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
    }
}

fn new_invoice(comp_code: &str, amt: f64) -> CreateInvoice {
    CreateInvoice {
        comp_code: Some(comp_code.to_string()),
        amt: Some(amt),
    }
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find_company(pool: PgPool) {
    let created = CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();
    assert_eq!(created.code, "ibm");
    assert_eq!(created.description.as_deref(), Some("IBM description"));

    let found = CompanyRepo::find_by_code(&pool, "ibm").await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_company_returns_none(pool: PgPool) {
    let found = CompanyRepo::find_by_code(&pool, "nope").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_code_is_unique_violation(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();

    let err = CompanyRepo::create(&pool, &new_company("ibm", "Other"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
    assert_eq!(
        unique_violation_constraint(&err),
        Some(CompanyRepo::CODE_CONSTRAINT)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_is_unique_violation(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();

    let err = CompanyRepo::create(&pool, &new_company("ibm2", "IBM"))
        .await
        .unwrap_err();
    assert_eq!(
        unique_violation_constraint(&err),
        Some(CompanyRepo::NAME_CONSTRAINT)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_companies_is_ordered_by_code(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("zeta", "Zeta"))
        .await
        .unwrap();
    CompanyRepo::create(&pool, &new_company("apple", "Apple"))
        .await
        .unwrap();

    let codes: Vec<String> = CompanyRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec!["apple", "zeta"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_company_keeps_code(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();

    let updated = CompanyRepo::update(
        &pool,
        "ibm",
        &UpdateCompany {
            name: Some("International Business Machines".into()),
            description: Some("Still blue".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.code, "ibm");
    assert_eq!(updated.name, "International Business Machines");
    assert_eq!(updated.description.as_deref(), Some("Still blue"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_company_returns_none(pool: PgPool) {
    let updated = CompanyRepo::update(
        &pool,
        "nope",
        &UpdateCompany {
            name: Some("X".into()),
            description: Some("Y".into()),
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_company_reports_whether_row_existed(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();

    assert!(CompanyRepo::delete(&pool, "ibm").await.unwrap());
    assert!(!CompanyRepo::delete(&pool, "ibm").await.unwrap());
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_invoice_applies_defaults(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();

    let invoice = InvoiceRepo::create(&pool, &new_invoice("ibm", 100.0))
        .await
        .unwrap();

    assert!(invoice.id > 0);
    assert_eq!(invoice.comp_code, "ibm");
    assert_eq!(invoice.amt, 100.0);
    assert!(!invoice.paid);
    assert!(invoice.paid_date.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_invoice_for_unknown_company_is_fk_violation(pool: PgPool) {
    let err = InvoiceRepo::create(&pool, &new_invoice("ghost", 10.0))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err));
    assert_matches!(err, sqlx::Error::Database(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_invoice_changes_only_amount(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();
    let original = InvoiceRepo::create(&pool, &new_invoice("ibm", 100.0))
        .await
        .unwrap();

    let updated = InvoiceRepo::update(&pool, original.id, &UpdateInvoice { amt: Some(250.5) })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.amt, 250.5);
    assert_eq!(updated.comp_code, original.comp_code);
    assert_eq!(updated.paid, original.paid);
    assert_eq!(updated.add_date, original.add_date);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_invoice_returns_none(pool: PgPool) {
    let updated = InvoiceRepo::update(&pool, 999_999, &UpdateInvoice { amt: Some(1.0) })
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_company_cascades_to_invoices(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();
    let invoice = InvoiceRepo::create(&pool, &new_invoice("ibm", 100.0))
        .await
        .unwrap();

    assert!(CompanyRepo::delete(&pool, "ibm").await.unwrap());

    let found = InvoiceRepo::find_by_id(&pool, invoice.id).await.unwrap();
    assert!(found.is_none());
    assert!(InvoiceRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_invoice_reports_whether_row_existed(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("ibm", "IBM"))
        .await
        .unwrap();
    let invoice = InvoiceRepo::create(&pool, &new_invoice("ibm", 100.0))
        .await
        .unwrap();

    assert!(InvoiceRepo::delete(&pool, invoice.id).await.unwrap());
    assert!(!InvoiceRepo::delete(&pool, invoice.id).await.unwrap());
}
