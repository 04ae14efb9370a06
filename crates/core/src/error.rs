/// Domain-level errors shared by the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field or file was missing from a request.
    #[error("{0}")]
    Validation(String),

    /// Any other failure while servicing a request.
    #[error("{0}")]
    Internal(String),
}
