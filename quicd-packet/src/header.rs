//! # QUIC Packet Header Types (RFC 8999, RFC 9000 Section 17)
//!
//! Lifetime-bound header structures. Every byte-range field is a slice of
//! the datagram the header was decoded from, so a header can never outlive
//! its buffer.

// ============================================================================
// Header Form Constants (RFC 8999 Section 5.1, RFC 9000 Section 17)
// ============================================================================

/// Header Form Bit (most significant bit)
/// 1 = Long Header, 0 = Short Header
pub const HEADER_FORM_BIT: u8 = 0x80;

/// Fixed Bit (second most significant bit)
/// MUST be set to 1 in all packets of this format
pub const FIXED_BIT: u8 = 0x40;

/// Long Packet Type Mask (bits 4-5)
pub const LONG_PACKET_TYPE_MASK: u8 = 0x30;

/// Type-Specific Bits Mask (Long Header, bits 0-3)
pub const TYPE_SPECIFIC_BITS_MASK: u8 = 0x0f;

/// Spin Bit (Short Header, bit 5)
pub const SPIN_BIT: u8 = 0x20;

/// Key Phase Bit (Short Header, bit 2)
pub const KEY_PHASE_BIT: u8 = 0x04;

/// Packet Number Length Mask (bottom 2 bits)
/// Encodes (packet_number_length - 1)
pub const PACKET_NUMBER_LENGTH_MASK: u8 = 0x03;

/// Smallest datagram accepted in either form.
pub const MIN_SHORT_PACKET_LEN: usize = 3;

/// First byte + version (4) + DCID length (1) + SCID length (1).
pub const MIN_LONG_PACKET_LEN: usize = 7;

/// Version value reserved for Version Negotiation packets.
pub const VERSION_NEGOTIATION: u32 = 0x0000_0000;

/// Largest connection ID permitted by QUIC version 1 (RFC 9000 Section 17.2).
///
/// The decoder itself accepts any length the wire can express (0-255).
pub const MAX_CID_LENGTH: usize = 20;

// ============================================================================
// Enumerations
// ============================================================================

/// Header Form (Long vs Short)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderForm {
    /// Long Header (handshake packets)
    Long,
    /// Short Header (1-RTT packets)
    Short,
}

impl HeaderForm {
    /// Header form selected by the first byte.
    pub fn from_first_byte(first_byte: u8) -> Self {
        if first_byte & HEADER_FORM_BIT != 0 {
            HeaderForm::Long
        } else {
            HeaderForm::Short
        }
    }
}

/// Long Packet Type (RFC 9000 Section 17.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongPacketType {
    /// Initial packet (type 0x0)
    Initial,
    /// 0-RTT packet (type 0x1)
    ZeroRtt,
    /// Handshake packet (type 0x2)
    Handshake,
    /// Retry packet (type 0x3)
    Retry,
}

impl LongPacketType {
    /// Packet type from the two type bits of a long header first byte.
    ///
    /// All four codes are assigned, so this is total.
    pub fn from_first_byte(first_byte: u8) -> Self {
        match (first_byte & LONG_PACKET_TYPE_MASK) >> 4 {
            0x00 => LongPacketType::Initial,
            0x01 => LongPacketType::ZeroRtt,
            0x02 => LongPacketType::Handshake,
            _ => LongPacketType::Retry,
        }
    }

    /// The 2-bit wire code of this type.
    pub fn code(&self) -> u8 {
        match self {
            LongPacketType::Initial => 0x00,
            LongPacketType::ZeroRtt => 0x01,
            LongPacketType::Handshake => 0x02,
            LongPacketType::Retry => 0x03,
        }
    }
}

// ============================================================================
// Header Structures (Zero-Copy, Lifetime-Bound)
// ============================================================================

/// Long Header (RFC 9000 Section 17.2)
///
/// Used during connection establishment. Carries the version and both
/// connection IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongHeader<'a> {
    /// Packet type
    pub packet_type: LongPacketType,

    /// Low four bits of the first byte, uninterpreted.
    ///
    /// Reserved bits and packet number length for Initial, 0-RTT and
    /// Handshake; unused for Retry. Still header-protected.
    pub type_specific_bits: u8,

    /// Version (0x00000000 for Version Negotiation)
    pub version: u32,

    /// Destination Connection ID (0-255 bytes)
    pub dcid: &'a [u8],

    /// Source Connection ID (0-255 bytes)
    pub scid: &'a [u8],
}

/// Short Header (RFC 9000 Section 17.3)
///
/// Used for 1-RTT packets. The DCID length is not encoded and comes from the
/// caller's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortHeader<'a> {
    /// Spin bit as seen on the wire
    pub spin: bool,

    /// Key phase bit as seen on the wire (still protected)
    pub key_phase: bool,

    /// Destination Connection ID
    pub dcid: &'a [u8],

    /// Truncated packet number (1-4 bytes, still protected)
    pub packet_number: &'a [u8],
}

/// Parsed Packet Header (unifies Long and Short headers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header<'a> {
    /// Long header packet
    Long(LongHeader<'a>),

    /// Short header packet
    Short(ShortHeader<'a>),
}

impl<'a> Header<'a> {
    /// Get the header form
    pub fn form(&self) -> HeaderForm {
        match self {
            Header::Long(_) => HeaderForm::Long,
            Header::Short(_) => HeaderForm::Short,
        }
    }

    /// Get destination connection ID
    pub fn dcid(&self) -> &'a [u8] {
        match self {
            Header::Long(h) => h.dcid,
            Header::Short(h) => h.dcid,
        }
    }

    /// Get source connection ID (only available in Long Header)
    pub fn scid(&self) -> Option<&'a [u8]> {
        match self {
            Header::Long(h) => Some(h.scid),
            Header::Short(_) => None,
        }
    }

    /// Get the version (only available in Long Header)
    pub fn version(&self) -> Option<u32> {
        match self {
            Header::Long(h) => Some(h.version),
            Header::Short(_) => None,
        }
    }

    /// Get the truncated packet number bytes (only available in Short Header)
    pub fn packet_number(&self) -> Option<&'a [u8]> {
        match self {
            Header::Long(_) => None,
            Header::Short(h) => Some(h.packet_number),
        }
    }

    /// Number of datagram bytes occupied by this header.
    pub fn wire_len(&self) -> usize {
        match self {
            Header::Long(h) => MIN_LONG_PACKET_LEN + h.dcid.len() + h.scid.len(),
            Header::Short(h) => 1 + h.dcid.len() + h.packet_number.len(),
        }
    }

    /// True for a long header whose version field is zero.
    pub fn is_version_negotiation(&self) -> bool {
        matches!(self, Header::Long(h) if h.version == VERSION_NEGOTIATION)
    }
}

/// A decoded datagram: the header plus every byte after it.
///
/// The payload is not inspected; for long headers it still contains any
/// type-specific fields (token, length, packet number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    /// Decoded header
    pub header: Header<'a>,

    /// Remaining bytes after the header (may be empty)
    pub payload: &'a [u8],
}

impl<'a> Packet<'a> {
    /// See [`Header::is_version_negotiation`].
    pub fn is_version_negotiation(&self) -> bool {
        self.header.is_version_negotiation()
    }
}
