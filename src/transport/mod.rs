//! Authenticated gRPC channel to the API gateway.
//!
//! A base URL such as `https://api.function.network/edge` becomes a
//! [`ChannelTarget`]: host, port, optional path prefix and TLS flag. The
//! channel built from it is wrapped twice:
//!
//! - [`PathPrefix`] re-applies the URL path to every RPC, since tonic only
//!   takes the scheme and authority from an endpoint URI.
//! - [`ApiKeyInterceptor`] attaches `x-api-key` to every call.
//!
//! One channel is opened per client. There is no pooling and no retry on
//! connect; TLS, HTTP/2 multiplexing and cancellation belong to tonic.

mod auth;
mod prefix;

pub use auth::{API_KEY_HEADER, ApiKeyInterceptor};
pub use prefix::PathPrefix;

use tokio::runtime::Handle;
use tonic::codegen::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::debug;
use url::Url;

use crate::proto::api_gateway_service_client::ApiGatewayServiceClient;
use crate::{FunctionError, Result, version};

/// The channel stack every call goes through.
pub type GatewayChannel = InterceptedService<PathPrefix<Channel>, ApiKeyInterceptor>;

/// Generated gateway client bound to an authenticated [`GatewayChannel`].
pub type GatewayServiceClient = ApiGatewayServiceClient<GatewayChannel>;

/// Where a channel connects, derived from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTarget {
    pub host: String,
    pub port: u16,
    /// Path prefix without a trailing slash; `None` for `""` and `"/"`.
    pub path: Option<String>,
    /// True iff the URL scheme is `https`.
    pub tls: bool,
}

impl ChannelTarget {
    /// Parse a base URL.
    ///
    /// A missing port defaults to 443 with TLS and 80 without.
    ///
    /// ```rust
    /// # use functionsdk::transport::ChannelTarget;
    /// let target = ChannelTarget::parse("https://api.function.network").unwrap();
    /// assert_eq!(target.host, "api.function.network");
    /// assert_eq!(target.port, 443);
    /// assert!(target.tls);
    /// ```
    pub fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| {
            FunctionError::InvalidArgument(format!("invalid base URL {base_url:?}: {e}"))
        })?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                FunctionError::InvalidArgument(format!("base URL {base_url:?} has no host"))
            })?
            .to_string();

        let tls = url.scheme() == "https";
        let port = url.port().unwrap_or(if tls { 443 } else { 80 });
        let path = match url.path().trim_end_matches('/') {
            "" => None,
            path => Some(path.to_string()),
        };

        Ok(Self {
            host,
            port,
            path,
            tls,
        })
    }

    /// Build the tonic endpoint for this target.
    pub fn endpoint(&self) -> Result<Endpoint> {
        let scheme = if self.tls { "https" } else { "http" };
        let uri = format!("{scheme}://{}:{}", self.host, self.port);
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| FunctionError::InvalidArgument(format!("invalid endpoint {uri}: {e}")))?
            .user_agent(version::user_agent())?;

        if !self.tls {
            return Ok(endpoint);
        }

        // SNI wants the bare name, without IPv6 brackets.
        let domain = self.host.trim_start_matches('[').trim_end_matches(']');
        let tls = ClientTlsConfig::new()
            .domain_name(domain)
            .with_webpki_roots();
        Ok(endpoint.tls_config(tls)?)
    }
}

/// Open a channel that connects on first use.
///
/// The channel's worker is spawned onto the current tokio runtime; without
/// one this fails with [`FunctionError::InvalidArgument`].
pub fn open_lazy(target: &ChannelTarget, api_key: &str) -> Result<GatewayServiceClient> {
    let interceptor = ApiKeyInterceptor::new(api_key)?;
    Handle::try_current().map_err(|_| {
        FunctionError::InvalidArgument(
            "Client::new must be called within a tokio runtime".to_string(),
        )
    })?;
    let channel = target.endpoint()?.connect_lazy();
    debug!(host = %target.host, port = target.port, tls = target.tls, path = ?target.path, "opened lazy gateway channel");
    Ok(bind(channel, target, interceptor))
}

/// Open a channel and connect it before returning.
pub async fn open(target: &ChannelTarget, api_key: &str) -> Result<GatewayServiceClient> {
    let interceptor = ApiKeyInterceptor::new(api_key)?;
    let channel = target.endpoint()?.connect().await?;
    debug!(host = %target.host, port = target.port, tls = target.tls, path = ?target.path, "connected gateway channel");
    Ok(bind(channel, target, interceptor))
}

fn bind(
    channel: Channel,
    target: &ChannelTarget,
    interceptor: ApiKeyInterceptor,
) -> GatewayServiceClient {
    let channel = PathPrefix::new(channel, target.path.as_deref());
    ApiGatewayServiceClient::with_interceptor(channel, interceptor)
}
