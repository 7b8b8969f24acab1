//! Function Network SDK error types

/// Function Network SDK error types
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    // Local validation, raised before any network activity
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Streaming errors
    /// The chat stream ended before its first chunk, so no role is known.
    #[error("stream ended before the first chunk")]
    StreamEmpty,

    // Channel/network errors
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Status returned by a call, passed through as received.
    #[error("remote error: {0}")]
    Remote(#[from] tonic::Status),

    // Configuration errors (CLI config file)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl FunctionError {
    /// Whether this error came from the network or channel rather than from
    /// the service rejecting the request.
    ///
    /// tonic reports connection failures on an established channel as
    /// `Unavailable` statuses, so those count as transport faults too.
    pub fn is_transport_fault(&self) -> bool {
        match self {
            FunctionError::Transport(_) => true,
            FunctionError::Remote(status) => matches!(
                status.code(),
                tonic::Code::Unavailable | tonic::Code::DeadlineExceeded | tonic::Code::Cancelled
            ),
            _ => false,
        }
    }

    /// The gRPC status code, for errors returned by a call.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            FunctionError::Remote(status) => Some(status.code()),
            _ => None,
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, FunctionError>;
