use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the identifier taken from the request path.
    ///
    /// `key` is rendered as text because companies are keyed by code and
    /// invoices by numeric id.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<ValidationErrors> for CoreError {
    /// Collapse field-level failures into a single message listing the
    /// offending fields in alphabetical order.
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        CoreError::Validation(format!("Missing required field(s): {}", fields.join(", ")))
    }
}
