//! Repository for the `companies` table.

use sqlx::PgPool;

use crate::models::company::{Company, CompanySummary, CreateCompany, UpdateCompany};

/// Column list shared across full-row queries.
const COLUMNS: &str = "code, name, description";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Constraint backing the `code` primary key.
    pub const CODE_CONSTRAINT: &'static str = "companies_pkey";

    /// Constraint backing the unique `name` column.
    pub const NAME_CONSTRAINT: &'static str = "companies_name_key";

    /// List every company's code and name, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanySummary>, sqlx::Error> {
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies ORDER BY code")
            .fetch_all(pool)
            .await
    }

    /// Find a company by its code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE code = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new company, returning the created row.
    ///
    /// A duplicate code or name surfaces as a unique violation from the
    /// database; see [`crate::unique_violation_constraint`].
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace a company's name and description.
    ///
    /// Returns `None` if no row with the given `code` exists.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = $2,
                description = $3
             WHERE code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by code. Returns `true` if a row was removed.
    ///
    /// The company's invoices go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
