//! functionsdk - Client SDK for the Function Network inference API gateway
//!
//! [`Client`] wraps the gateway's gRPC service: it opens an authenticated
//! channel from [`ClientOptions`] and exposes chat completion (unary and
//! streaming), embeddings, text-to-image and transcription as async methods.
//!
//! # Chat Example
//!
//! ```rust,no_run
//! use functionsdk::{ChatCompleteMessage, Client, ClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> functionsdk::Result<()> {
//!     let client = Client::new(ClientOptions::new("fxn-your-key"))?;
//!
//!     let response = client
//!         .chat_complete(
//!             "meta/llama-3.1-8b-instruct",
//!             &[
//!                 ChatCompleteMessage::system("You are a helpful assistant."),
//!                 ChatCompleteMessage::user("What is the capital of France?"),
//!             ],
//!         )
//!         .await?;
//!
//!     if let Some(message) = response.response {
//!         println!("{}", message.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Streaming Example
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use functionsdk::{ChatCompleteMessage, Client, ClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> functionsdk::Result<()> {
//!     let client = Client::new(ClientOptions::new("fxn-your-key"))?;
//!
//!     let mut stream = client
//!         .chat_complete_stream(
//!             "meta/llama-3.1-8b-instruct",
//!             &[ChatCompleteMessage::user("Tell me a story.")],
//!         )
//!         .await?;
//!
//!     println!("[{}]", stream.role);
//!     while let Some(token) = stream.token_stream.next().await {
//!         print!("{}", token?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod stream;
pub mod telemetry;
pub mod traits;
pub mod transport;
pub mod types;
pub mod version;

/// Generated wire types and gRPC client/server for `apigateway.v1`.
pub mod proto {
    tonic::include_proto!("apigateway.v1");
}

// Re-export main types at crate root
pub use client::Client;
pub use error::{FunctionError, Result};
pub use stream::TokenStream;
pub use traits::{ChunkStream, GatewayStub};
pub use version::PKG_VERSION;

// Re-export all types
pub use types::{
    ChatCompleteMessage, ChatCompleteResponse, ChatCompleteStreamResponse, ChatCompleteUsage,
    ClientOptions, DEFAULT_BASE_URL, EmbedResponse, ImageQuality, TextToImageResponseImage,
    TranscribeResponse,
};
