//! Decoder configuration.
//!
//! The only value the decoder cannot learn from the wire is the length of
//! short-header destination connection IDs. It is agreed out-of-band (the
//! listener issues CIDs of that length) and is the same for every 1-RTT
//! packet on that listener.
//!
//! # Example
//!
//! ```toml
//! # quicd-packet.toml
//! short_dcid_len = 20
//! ```

pub mod loader;

pub use loader::{load_config, load_config_with_env_prefix, ENV_PREFIX};

use crate::header::MAX_CID_LENGTH;
use serde::{Deserialize, Serialize};

/// Connection ID length issued by quicd's routing CID generator.
pub const DEFAULT_SHORT_DCID_LEN: usize = 20;

/// Largest connection ID a long header length byte can describe.
pub const MAX_WIRE_CID_LENGTH: usize = u8::MAX as usize;

/// Configuration for [`PacketDecoder`](crate::PacketDecoder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Destination connection ID length for short header packets.
    pub short_dcid_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            short_dcid_len: DEFAULT_SHORT_DCID_LEN,
        }
    }
}

impl DecoderConfig {
    /// Config with an explicit short header DCID length.
    pub fn with_short_dcid_len(short_dcid_len: usize) -> Self {
        Self { short_dcid_len }
    }

    /// Validate the configuration.
    ///
    /// Returns `Ok(())` if valid, or a list of error messages if invalid.
    /// Does not log; see [`warnings`](Self::warnings) for accepted but
    /// non-standard values.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.short_dcid_len > MAX_WIRE_CID_LENGTH {
            errors.push(format!(
                "short_dcid_len ({}) exceeds {} and could never appear in a long header",
                self.short_dcid_len, MAX_WIRE_CID_LENGTH
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Values that pass validation but fall outside QUIC version 1.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.short_dcid_len > MAX_CID_LENGTH && self.short_dcid_len <= MAX_WIRE_CID_LENGTH {
            warnings.push(format!(
                "short_dcid_len ({}) exceeds the QUIC v1 connection ID limit of {}",
                self.short_dcid_len, MAX_CID_LENGTH
            ));
        }

        warnings
    }
}
