use thiserror::Error;

/// Failure taxonomy for the request pipeline.
///
/// Every step that can fail signals one of these instead of panicking; the
/// HTTP boundary maps each variant to a status code and never leaks a
/// partially-applied write.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload violated a schema rule; the message names the first one.
    #[error("{0}")]
    Validation(String),

    /// Path identifier is not a well-formed record identifier.
    #[error("Provided ID is not a valid record identifier")]
    InvalidIdentifier,

    /// Identifier is well-formed but no record matches it.
    #[error("No weather record exists with the given ID")]
    NotFound,

    /// The external provider responded, but not with a success status.
    #[error("Unable to fetch weather data for the specified coordinates")]
    LocationUnconfirmed,

    /// The external lookup call itself failed (transport error, timeout).
    #[error("{0}")]
    ExternalService(String),

    /// The storage backend failed.
    #[error("{0}")]
    Storage(String),

    /// Catch-all at the pipeline boundary.
    #[error("{0}")]
    Unhandled(String),
}

impl Error {
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Error::ExternalService(_) | Error::Storage(_) | Error::Unhandled(_)
        )
    }
}
