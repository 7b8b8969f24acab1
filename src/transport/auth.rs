//! Per-call API key header.

use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::{FunctionError, Result};

/// Metadata key carrying the API key on every call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Interceptor that attaches [`API_KEY_HEADER`] to every request.
///
/// The value is marked sensitive, so it prints as `Sensitive` in debug output.
#[derive(Debug, Clone)]
pub struct ApiKeyInterceptor {
    api_key: MetadataValue<Ascii>,
}

impl ApiKeyInterceptor {
    /// Fails with [`FunctionError::InvalidArgument`] if the key is empty or
    /// not a valid ASCII header value.
    pub fn new(api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(FunctionError::InvalidArgument(
                "api_key must be specified".to_string(),
            ));
        }
        let mut value: MetadataValue<Ascii> = api_key.parse().map_err(|_| {
            FunctionError::InvalidArgument("api_key is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        Ok(Self { api_key: value })
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, mut request: Request<()>) -> std::result::Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(API_KEY_HEADER, self.api_key.clone());
        Ok(request)
    }
}
