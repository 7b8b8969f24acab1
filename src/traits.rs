//! Core GatewayStub trait

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::Result;
use crate::proto::{
    ChatCompleteRequest, ChatCompleteResponse, ChatCompleteStreamResponse, EmbedRequest,
    EmbedResponse, TextToImageRequest, TextToImageResponse, TranscribeRequest, TranscribeResponse,
};

/// Chunks of a streaming chat completion, as received.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ChatCompleteStreamResponse>> + Send>>;

/// One method per remote gateway operation.
///
/// [`Client`](crate::Client) depends only on this trait. [`GrpcStub`](crate::client::GrpcStub)
/// is the production implementation; tests and custom transports provide
/// their own. Requests and responses are the wire records from
/// [`crate::proto`]. Every gateway operation is required.
#[async_trait]
pub trait GatewayStub: Send + Sync {
    /// Unary chat completion
    async fn chat_complete(&self, request: ChatCompleteRequest) -> Result<ChatCompleteResponse>;

    /// Server-streaming chat completion
    async fn chat_complete_stream(&self, request: ChatCompleteRequest) -> Result<ChunkStream>;

    /// Vector embeddings for one input string
    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse>;

    /// Image generation
    async fn text_to_image(&self, request: TextToImageRequest) -> Result<TextToImageResponse>;

    /// Audio transcription from a URL
    async fn transcribe(&self, request: TranscribeRequest) -> Result<TranscribeResponse>;
}
