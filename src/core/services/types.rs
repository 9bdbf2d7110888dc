use crate::error::ApiError;

/// Service layer error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Missing or invalid field: {field}")]
    Validation { field: String },

    #[error("Too many submissions within {window_secs}s")]
    RateLimited { window_secs: u64 },

    #[error("Not found: {resource_type} with ID {id}")]
    NotFound { resource_type: String, id: u32 },
}

/// Work-code list parameters
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Search term matched against visible fields
    pub search: Option<String>,
    /// Maximum number of results to return
    pub limit: Option<u32>,
}
