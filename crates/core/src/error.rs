/// Why an inbound payload was dropped instead of recorded.
///
/// Rejection is always recovered locally by the ingestion service: the
/// payload is logged and discarded, and the store is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The payload did not decode as a JSON object.
    #[error("payload did not decode as a JSON object")]
    MalformedPayload,

    /// The payload decoded but contained none of the recognized sensor
    /// keys (a pure heartbeat / empty frame).
    #[error("payload contained none of the recognized sensor keys")]
    EmptyPayload,
}
