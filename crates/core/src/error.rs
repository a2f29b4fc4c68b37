use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid structured payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown scanner type: {0}")]
    UnknownScannerType(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(ValidationErrors),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
