//! Token stream over a streaming chat completion.
//!
//! [`Client::chat_complete_stream`](crate::Client::chat_complete_stream)
//! awaits the first chunk to learn the role, then hands the rest of the call
//! to a [`TokenStream`]. The stream yields the first chunk's content, then
//! each later chunk's content, and ends when the call does.
//!
//! It is a single forward pass. Once it has ended, or yielded an error, it
//! only yields `None`. Dropping it drops the underlying call, which tonic
//! cancels.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};

use crate::proto::ChatCompleteStreamResponse;
use crate::traits::ChunkStream;
use crate::{Result, telemetry};

enum State {
    /// First chunk consumed for its role; its content not yet yielded.
    Peeked(String),
    Streaming,
    Finished,
}

/// Content strings of a streaming chat completion.
pub struct TokenStream {
    chunks: ChunkStream,
    state: State,
}

impl TokenStream {
    pub(crate) fn new(first: String, chunks: ChunkStream) -> Self {
        Self {
            chunks,
            state: State::Peeked(first),
        }
    }

    /// True once the stream has ended or failed.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// Drain the stream into one string.
    ///
    /// Stops at the first error; tokens read before it are lost to the
    /// caller, so iterate directly when partial output matters.
    pub async fn collect_text(mut self) -> Result<String> {
        let mut text = String::new();
        while let Some(token) = self.next().await {
            text.push_str(&token?);
        }
        Ok(text)
    }

    fn finish(&mut self) {
        self.state = State::Finished;
        // Release the call now rather than when the stream is dropped.
        self.chunks = Box::pin(futures_util::stream::empty());
    }
}

fn content_of(chunk: ChatCompleteStreamResponse) -> String {
    chunk.response.map(|message| message.content).unwrap_or_default()
}

impl Stream for TokenStream {
    type Item = Result<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        match std::mem::replace(&mut this.state, State::Streaming) {
            State::Peeked(first) => {
                metrics::counter!(telemetry::STREAM_TOKENS_TOTAL).increment(1);
                return Poll::Ready(Some(Ok(first)));
            }
            State::Finished => {
                this.state = State::Finished;
                return Poll::Ready(None);
            }
            State::Streaming => {}
        }

        match this.chunks.poll_next_unpin(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Ok(chunk))) => {
                metrics::counter!(telemetry::STREAM_TOKENS_TOTAL).increment(1);
                Poll::Ready(Some(Ok(content_of(chunk))))
            }
            Poll::Ready(Some(Err(e))) => {
                this.finish();
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.finish();
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Peeked(_) => {
                let (lower, upper) = self.chunks.size_hint();
                (lower.saturating_add(1), upper.and_then(|u| u.checked_add(1)))
            }
            State::Streaming => self.chunks.size_hint(),
            State::Finished => (0, Some(0)),
        }
    }
}

impl FusedStream for TokenStream {
    fn is_terminated(&self) -> bool {
        self.is_finished()
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Peeked(_) => "peeked",
            State::Streaming => "streaming",
            State::Finished => "finished",
        };
        f.debug_struct("TokenStream").field("state", &state).finish()
    }
}
