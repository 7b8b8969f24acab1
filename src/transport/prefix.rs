//! Path prefix layer for gRPC requests.
//!
//! tonic builds request URIs from the endpoint's scheme and authority plus
//! the RPC path (`/apigateway.v1.APIGatewayService/Embed`), dropping any path
//! on the endpoint itself. Gateways mounted under a path need it re-applied.

use std::sync::Arc;
use std::task::{Context, Poll};

use http::Uri;
use http::uri::PathAndQuery;
use tower::Service;

/// Tower service that prefixes every request path.
#[derive(Debug, Clone)]
pub struct PathPrefix<S> {
    inner: S,
    prefix: Option<Arc<str>>,
}

impl<S> PathPrefix<S> {
    /// `prefix` should start with `/` and carry no trailing slash. `None`,
    /// `""` and `"/"` pass requests through unchanged.
    pub fn new(inner: S, prefix: Option<&str>) -> Self {
        let prefix = prefix
            .map(|p| p.trim_end_matches('/'))
            .filter(|p| !p.is_empty())
            .map(Arc::from);
        Self { inner, prefix }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl<S, B> Service<http::Request<B>> for PathPrefix<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: http::Request<B>) -> Self::Future {
        if let Some(prefix) = &self.prefix {
            apply_prefix(request.uri_mut(), prefix);
        }
        self.inner.call(request)
    }
}

/// Rewrite `uri` so its path starts with `prefix`.
///
/// A join that does not form a valid URI leaves `uri` untouched.
fn apply_prefix(uri: &mut Uri, prefix: &str) {
    let path_and_query = uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let Ok(joined) = PathAndQuery::try_from(format!("{prefix}{path_and_query}")) else {
        return;
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(joined);
    if let Ok(prefixed) = Uri::from_parts(parts) {
        *uri = prefixed;
    }
}
