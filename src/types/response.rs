//! Streaming chat response

use crate::stream::TokenStream;

/// A streaming response for
/// [`Client::chat_complete_stream`](crate::Client::chat_complete_stream).
///
/// The role is known before any token is read; it comes from the first chunk
/// and holds for the whole stream.
#[derive(Debug)]
pub struct ChatCompleteStreamResponse {
    /// Role of the response message.
    pub role: String,
    /// Output tokens, in generation order.
    pub token_stream: TokenStream,
}
