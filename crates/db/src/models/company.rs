//! Company entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A full row from the `companies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// List projection of a company: no description.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// DTO for creating a company. Every field must be present and non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(required, length(min = 1))]
    pub code: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

/// DTO for updating a company.
///
/// There is no `code` field: the primary key is immutable and a `code` sent
/// in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
}
