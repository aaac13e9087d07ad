//! Error types for packet header decoding.
//!
//! Every failure is an input-validation failure. Malformed and truncated
//! datagrams are routine on an open UDP port, so they surface as values the
//! caller can count and drop, never as a panic.

use thiserror::Error;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a datagram cannot be decoded as a packet header.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The datagram ends before a field the header requires.
    ///
    /// `needed` is the minimum datagram length at the checkpoint that failed;
    /// `actual` is the length that was supplied.
    #[error("datagram too short: need {needed} bytes, have {actual}")]
    TooShort { needed: usize, actual: usize },

    /// The fixed bit (0x40) of the first byte is clear.
    ///
    /// The datagram is not a packet of this format at all, e.g. some other
    /// protocol sharing the port.
    #[error("fixed bit not set in first byte")]
    InvalidFixedBit,
}

impl Error {
    /// Returns true if more bytes would have been needed to decode.
    pub fn is_too_short(&self) -> bool {
        matches!(self, Error::TooShort { .. })
    }

    pub(crate) fn too_short(needed: usize, actual: usize) -> Self {
        Error::TooShort { needed, actual }
    }
}
