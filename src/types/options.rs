//! Client configuration

use std::fmt;

use serde::Deserialize;

/// The default Function Network API gateway base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.function.network";

/// Options used to configure a [`Client`](crate::Client).
///
/// ```rust
/// # use functionsdk::{ClientOptions, DEFAULT_BASE_URL};
/// let options = ClientOptions::new("fxn-key");
/// assert_eq!(options.base_url, DEFAULT_BASE_URL);
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientOptions {
    /// API key used to authenticate calls made to the network.
    pub api_key: String,
    /// API gateway base URL. Most users will not need to change this.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientOptions")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}
