//! quicd-packet: Zero-Copy QUIC Packet Header Decoding
//!
//! Splits a single received datagram into its invariant packet header and
//! the bytes that follow it. Handles both header forms of RFC 8999 / RFC 9000
//! Section 17:
//!
//! - **Long header**: connection establishment (Initial, 0-RTT, Handshake,
//!   Retry, and Version Negotiation when the version field is zero)
//! - **Short header**: 1-RTT packets, whose destination connection ID length
//!   is not on the wire and must be supplied by the caller
//!
//! # Architecture
//!
//! - **Zero-copy**: every byte-range field borrows from the input datagram,
//!   or is a `bytes::Bytes` view of it via [`OwnedPacket`]
//! - **Stateless**: no connection state, no allocation, safe to call from any
//!   number of workers concurrently
//! - **Panic-free on input**: every length read from the wire is checked
//!   against the datagram before slicing
//!
//! Packet number reconstruction, header protection removal, and frame
//! parsing happen downstream on the returned [`Packet`].
//!
//! # Example
//!
//! ```rust
//! use quicd_packet::{parse, Header, LongPacketType};
//!
//! let datagram = [0xc3, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00];
//! let packet = parse(&datagram, 8).unwrap();
//!
//! match packet.header {
//!     Header::Long(h) => {
//!         assert_eq!(h.packet_type, LongPacketType::Initial);
//!         assert_eq!(h.type_specific_bits, 3);
//!         assert_eq!(h.version, 1);
//!     }
//!     Header::Short(_) => unreachable!(),
//! }
//! assert!(packet.payload.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod header;
pub mod owned;
pub mod parser;

pub use crate::config::{load_config, DecoderConfig};
pub use decoder::PacketDecoder;
pub use error::{Error, Result};
pub use header::{Header, HeaderForm, LongHeader, LongPacketType, Packet, ShortHeader};
pub use owned::{OwnedHeader, OwnedPacket};
pub use parser::{extract_dcid, parse, peek_header_form};
