//! [`GatewayStub`] implementation over the generated tonic client.

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::proto::{
    ChatCompleteRequest, ChatCompleteResponse, EmbedRequest, EmbedResponse, TextToImageRequest,
    TextToImageResponse, TranscribeRequest, TranscribeResponse,
};
use crate::traits::{ChunkStream, GatewayStub};
use crate::transport::GatewayServiceClient;
use crate::{FunctionError, Result};

/// Forwards each operation to the gateway over an authenticated channel.
///
/// Statuses are returned unchanged as [`FunctionError::Remote`].
#[derive(Debug, Clone)]
pub struct GrpcStub {
    inner: GatewayServiceClient,
}

impl GrpcStub {
    pub fn new(inner: GatewayServiceClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GatewayStub for GrpcStub {
    async fn chat_complete(&self, request: ChatCompleteRequest) -> Result<ChatCompleteResponse> {
        let response = self.inner.clone().chat_complete(request).await?;
        Ok(response.into_inner())
    }

    async fn chat_complete_stream(&self, request: ChatCompleteRequest) -> Result<ChunkStream> {
        let response = self.inner.clone().chat_complete_stream(request).await?;
        let stream = response
            .into_inner()
            .map(|chunk| chunk.map_err(FunctionError::from));
        Ok(Box::pin(stream))
    }

    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse> {
        let response = self.inner.clone().embed(request).await?;
        Ok(response.into_inner())
    }

    async fn text_to_image(&self, request: TextToImageRequest) -> Result<TextToImageResponse> {
        let response = self.inner.clone().text_to_image(request).await?;
        Ok(response.into_inner())
    }

    async fn transcribe(&self, request: TranscribeRequest) -> Result<TranscribeResponse> {
        let response = self.inner.clone().transcribe(request).await?;
        Ok(response.into_inner())
    }
}
