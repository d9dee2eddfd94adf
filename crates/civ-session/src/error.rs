//! Error types for the session client

use thiserror::Error;

/// Errors that can occur while binding or running a radio session
#[derive(Debug, Error)]
pub enum SessionError {
    /// No port in the configured local range could be bound
    #[error("no free UDP port in {low}..={high}")]
    NoFreePort {
        /// Low end of the inclusive range
        low: u16,
        /// High end of the inclusive range
        high: u16,
    },

    /// The radio did not reply within the configured timeout
    #[error("no reply to {exchange} within {timeout_ms}ms")]
    ReplyTimeout {
        /// Which exchange was waiting for the reply
        exchange: &'static str,
        /// Configured bound in milliseconds
        timeout_ms: u64,
    },

    /// Sending a frame failed
    #[error("send failed during {exchange}: {source}")]
    Send {
        /// Which exchange was sending
        exchange: &'static str,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// Receiving a reply failed
    #[error("receive failed during {exchange}: {source}")]
    Recv {
        /// Which exchange was receiving
        exchange: &'static str,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
