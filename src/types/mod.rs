//! Public types for the Function Network API.
//!
//! Request and response records are the generated wire types from
//! [`crate::proto`], re-exported here unchanged.

mod message;
mod options;
mod response;

pub use options::{ClientOptions, DEFAULT_BASE_URL};
pub use response::ChatCompleteStreamResponse;

pub use crate::proto::{
    ChatCompleteMessage, ChatCompleteResponse, ChatCompleteUsage, EmbedResponse, ImageQuality,
    TextToImageResponseImage, TranscribeResponse,
};
