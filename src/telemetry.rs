//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `functionsdk_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation`: gateway call (e.g. "chat_complete", "embed")
//! - `status`: outcome: "ok" or "error"
//! - `direction`: token direction: "prompt" or "completion"

/// Total gateway calls made by clients.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "functionsdk_requests_total";

/// Call duration in seconds. For streaming calls this covers the wait for
/// the first chunk only.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "functionsdk_request_duration_seconds";

/// Total tokens reported by unary chat completions.
///
/// Labels: `direction` ("prompt" | "completion").
pub const TOKENS_TOTAL: &str = "functionsdk_tokens_total";

/// Total tokens yielded by chat token streams.
pub const STREAM_TOKENS_TOTAL: &str = "functionsdk_stream_tokens_total";
