//! `Bytes`-backed packet views.
//!
//! Same decode as [`parse`](crate::parse), but each field is a
//! [`Bytes`] handle sharing the datagram's allocation. Lets a header travel
//! to another task or outlive the receive buffer borrow without copying.

use bytes::Bytes;

use crate::error::Result;
use crate::header::{Header, HeaderForm, LongPacketType, VERSION_NEGOTIATION};
use crate::parser;

/// Owned counterpart of [`Header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedHeader {
    /// Long header packet
    Long {
        packet_type: LongPacketType,
        type_specific_bits: u8,
        version: u32,
        dcid: Bytes,
        scid: Bytes,
    },

    /// Short header packet
    Short {
        spin: bool,
        key_phase: bool,
        dcid: Bytes,
        packet_number: Bytes,
    },
}

impl OwnedHeader {
    /// Header form (long or short).
    pub fn form(&self) -> HeaderForm {
        match self {
            OwnedHeader::Long { .. } => HeaderForm::Long,
            OwnedHeader::Short { .. } => HeaderForm::Short,
        }
    }

    /// Destination connection ID.
    pub fn dcid(&self) -> &Bytes {
        match self {
            OwnedHeader::Long { dcid, .. } | OwnedHeader::Short { dcid, .. } => dcid,
        }
    }

    /// Whether this is a Version Negotiation packet (long header, version 0).
    pub fn is_version_negotiation(&self) -> bool {
        matches!(self, OwnedHeader::Long { version, .. } if *version == VERSION_NEGOTIATION)
    }
}

/// Owned counterpart of [`Packet`](crate::Packet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPacket {
    /// Decoded header
    pub header: OwnedHeader,
    /// Bytes following the header
    pub payload: Bytes,
}

impl OwnedPacket {
    /// Decode `datagram`; every field shares its allocation.
    pub fn decode(datagram: Bytes, short_dcid_len: usize) -> Result<Self> {
        let packet = parser::parse(&datagram, short_dcid_len)?;

        let header = match packet.header {
            Header::Long(h) => OwnedHeader::Long {
                packet_type: h.packet_type,
                type_specific_bits: h.type_specific_bits,
                version: h.version,
                dcid: datagram.slice_ref(h.dcid),
                scid: datagram.slice_ref(h.scid),
            },
            Header::Short(h) => OwnedHeader::Short {
                spin: h.spin,
                key_phase: h.key_phase,
                dcid: datagram.slice_ref(h.dcid),
                packet_number: datagram.slice_ref(h.packet_number),
            },
        };

        Ok(Self {
            header,
            payload: datagram.slice_ref(packet.payload),
        })
    }

    /// Whether the header is a Version Negotiation packet.
    pub fn is_version_negotiation(&self) -> bool {
        self.header.is_version_negotiation()
    }
}
