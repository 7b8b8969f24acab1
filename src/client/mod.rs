//! The Function Network client.
//!
//! [`Client`] owns one [`GatewayStub`] and exposes one async method per
//! gateway capability. Calls are independent: nothing is cached, retried or
//! synchronized between them, and every failure is returned to the caller
//! of the method that hit it.

mod grpc_stub;

pub use grpc_stub::GrpcStub;

use std::time::Instant;

use futures_util::StreamExt;
use tracing::{instrument, warn};

use crate::proto::{
    ChatCompleteRequest, EmbedRequest, TextToImageRequest, TranscribeRequest,
};
use crate::stream::TokenStream;
use crate::transport::{self, ChannelTarget};
use crate::{
    ChatCompleteMessage, ChatCompleteResponse, ChatCompleteStreamResponse, ChatCompleteUsage,
    ClientOptions, EmbedResponse, FunctionError, GatewayStub, ImageQuality, Result,
    TextToImageResponseImage, TranscribeResponse, telemetry,
};

/// A client that can make inference calls to the Function Network.
///
/// Construction either returns a ready client or an error; there is no
/// half-built state and no reconnect. Build a new client to recover from a
/// broken channel.
pub struct Client {
    stub: Box<dyn GatewayStub>,
}

impl Client {
    /// Create a client whose channel connects on first use.
    ///
    /// Fails with [`FunctionError::InvalidArgument`] for an empty API key, an
    /// unusable base URL, or when called outside a tokio runtime.
    ///
    /// ```rust,no_run
    /// # use functionsdk::{Client, ClientOptions};
    /// # #[tokio::main]
    /// # async fn main() -> functionsdk::Result<()> {
    /// let client = Client::new(ClientOptions::new("fxn-your-key"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(options: ClientOptions) -> Result<Self> {
        let target = resolve_target(&options)?;
        let inner = transport::open_lazy(&target, &options.api_key)?;
        Ok(Self::with_stub(GrpcStub::new(inner)))
    }

    /// Create a client and connect its channel before returning.
    ///
    /// Connection failures surface here as [`FunctionError::Transport`]
    /// instead of on the first call.
    pub async fn connect(options: ClientOptions) -> Result<Self> {
        let target = resolve_target(&options)?;
        let inner = transport::open(&target, &options.api_key).await?;
        Ok(Self::with_stub(GrpcStub::new(inner)))
    }

    /// Create a client over any [`GatewayStub`] implementation.
    pub fn with_stub(stub: impl GatewayStub + 'static) -> Self {
        Self {
            stub: Box::new(stub),
        }
    }

    /// Generate the next reply to a conversation, returned all at once with
    /// its token usage.
    ///
    /// Messages are sent in the order given. Use
    /// [`chat_complete_stream`](Self::chat_complete_stream) to receive tokens
    /// as they are generated.
    #[instrument(skip_all, fields(operation = "chat_complete", model = %model, messages = messages.len()))]
    pub async fn chat_complete(
        &self,
        model: &str,
        messages: &[ChatCompleteMessage],
    ) -> Result<ChatCompleteResponse> {
        let start = Instant::now();
        let result = self.stub.chat_complete(chat_request(model, messages)).await;
        record_request("chat_complete", start, &result);
        if let Ok(ChatCompleteResponse {
            usage: Some(usage), ..
        }) = &result
        {
            record_token_usage(usage);
        }
        result
    }

    /// Generate the next reply to a conversation as a token stream.
    ///
    /// Waits for the first chunk so the returned role is known before any
    /// token is read. A call that ends without chunks fails with
    /// [`FunctionError::StreamEmpty`]. Errors after that point are yielded
    /// by the token stream where they occur.
    #[instrument(skip_all, fields(operation = "chat_complete_stream", model = %model, messages = messages.len()))]
    pub async fn chat_complete_stream(
        &self,
        model: &str,
        messages: &[ChatCompleteMessage],
    ) -> Result<ChatCompleteStreamResponse> {
        let start = Instant::now();
        let result = self.open_stream(chat_request(model, messages)).await;
        record_request("chat_complete_stream", start, &result);
        result
    }

    async fn open_stream(&self, request: ChatCompleteRequest) -> Result<ChatCompleteStreamResponse> {
        let mut chunks = self.stub.chat_complete_stream(request).await?;
        let first = chunks.next().await.ok_or(FunctionError::StreamEmpty)??;
        let first = first.response.unwrap_or_default();
        Ok(ChatCompleteStreamResponse {
            role: first.role,
            token_stream: TokenStream::new(first.content, chunks),
        })
    }

    /// Generate the vector embedding of one input string.
    #[instrument(skip_all, fields(operation = "embed", model = %model))]
    pub async fn embed(&self, model: &str, input: &str) -> Result<EmbedResponse> {
        let start = Instant::now();
        let request = EmbedRequest {
            model: model.to_string(),
            input: input.to_string(),
        };
        let result = self.stub.embed(request).await;
        record_request("embed", start, &result);
        result
    }

    /// Generate images from a text prompt.
    ///
    /// Images come back in generation order as downloadable URLs. The URLs
    /// are not kept indefinitely; copy the images if they must persist.
    /// `size` is passed through as given (e.g. `"1024x1024"`).
    #[instrument(skip_all, fields(operation = "text_to_image", model = %model, count = count, size = %size))]
    pub async fn text_to_image(
        &self,
        model: &str,
        prompt: &str,
        count: u32,
        quality: ImageQuality,
        size: &str,
    ) -> Result<Vec<TextToImageResponseImage>> {
        let start = Instant::now();
        let request = TextToImageRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            count,
            quality: quality as i32,
            size: size.to_string(),
        };
        let result = self.stub.text_to_image(request).await;
        record_request("text_to_image", start, &result);
        result.map(|response| response.images)
    }

    /// Transcribe the audio at `url`, which the service fetches itself.
    #[instrument(skip_all, fields(operation = "transcribe", model = %model))]
    pub async fn transcribe(&self, model: &str, url: &str) -> Result<TranscribeResponse> {
        let start = Instant::now();
        let request = TranscribeRequest {
            model: model.to_string(),
            url: url.to_string(),
        };
        let result = self.stub.transcribe(request).await;
        record_request("transcribe", start, &result);
        result
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Validate options before touching the network. The key is checked first so
/// an empty key is reported whatever the URL.
fn resolve_target(options: &ClientOptions) -> Result<ChannelTarget> {
    if options.api_key.is_empty() {
        return Err(FunctionError::InvalidArgument(
            "api_key must be specified".to_string(),
        ));
    }
    ChannelTarget::parse(&options.base_url)
}

fn chat_request(model: &str, messages: &[ChatCompleteMessage]) -> ChatCompleteRequest {
    ChatCompleteRequest {
        model: model.to_string(),
        message: messages.to_vec(),
    }
}

/// Record request outcome metrics (counter + histogram).
fn record_request<T>(operation: &'static str, start: Instant, result: &Result<T>) {
    let status = match result {
        Ok(_) => "ok",
        Err(e) => {
            warn!(operation, error = %e, "gateway call failed");
            "error"
        }
    };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record token usage metrics from a chat response.
fn record_token_usage(usage: &ChatCompleteUsage) {
    metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "prompt")
        .increment(u64::from(usage.prompt_tokens));
    metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "completion")
        .increment(u64::from(usage.completion_tokens));
}
