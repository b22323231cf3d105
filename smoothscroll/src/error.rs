use alloc::string::String;

use thiserror::Error;

/// Returned when a listener cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error("event name must not be empty")]
    EmptyEventName,

    #[error("unknown scroll event `{0}` (expected `scroll` or `scrollend`)")]
    UnknownEvent(String),
}
