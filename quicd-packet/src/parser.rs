//! # Zero-Copy Header Parser (RFC 9000 Section 17)
//!
//! Splits a datagram into header fields and payload without copying. All
//! returned slices borrow from the input datagram.
//!
//! Every length read from the wire is checked against the datagram length
//! before it is used to slice.

use crate::error::{Error, Result};
use crate::header::*;

/// Parse the packet header at the start of `datagram`.
///
/// `short_dcid_len` is the destination connection ID length used by short
/// headers on this connection or listener; the short form does not encode it.
/// It is ignored for long headers, which carry explicit length prefixes.
///
/// The returned [`Packet`] borrows from `datagram`.
///
/// # Errors
///
/// - [`Error::TooShort`]: the datagram ends before a required field
/// - [`Error::InvalidFixedBit`]: the fixed bit is clear
pub fn parse(datagram: &[u8], short_dcid_len: usize) -> Result<Packet<'_>> {
    if datagram.len() < MIN_SHORT_PACKET_LEN {
        return Err(Error::too_short(MIN_SHORT_PACKET_LEN, datagram.len()));
    }

    let first_byte = datagram[0];

    // Validate Fixed Bit (RFC 9000 Section 17.2)
    if first_byte & FIXED_BIT == 0 {
        return Err(Error::InvalidFixedBit);
    }

    match HeaderForm::from_first_byte(first_byte) {
        HeaderForm::Long => parse_long_header(datagram),
        HeaderForm::Short => parse_short_header(datagram, short_dcid_len),
    }
}

/// Parse Long Header (RFC 9000 Section 17.2)
fn parse_long_header(datagram: &[u8]) -> Result<Packet<'_>> {
    let len = datagram.len();
    if len < MIN_LONG_PACKET_LEN {
        return Err(Error::too_short(MIN_LONG_PACKET_LEN, len));
    }

    let first_byte = datagram[0];
    let packet_type = LongPacketType::from_first_byte(first_byte);
    let type_specific_bits = first_byte & TYPE_SPECIFIC_BITS_MASK;

    let version = u32::from_be_bytes([datagram[1], datagram[2], datagram[3], datagram[4]]);

    // DCID Length + DCID. The bound also covers the SCID length byte.
    let dcid_len = datagram[5] as usize;
    let needed = MIN_LONG_PACKET_LEN + dcid_len;
    if len < needed {
        return Err(Error::too_short(needed, len));
    }
    let mut offset = 6;
    let dcid = &datagram[offset..offset + dcid_len];
    offset += dcid_len;

    // SCID Length + SCID
    let scid_len = datagram[offset] as usize;
    offset += 1;
    let needed = MIN_LONG_PACKET_LEN + dcid_len + scid_len;
    if len < needed {
        return Err(Error::too_short(needed, len));
    }
    let scid = &datagram[offset..offset + scid_len];
    offset += scid_len;

    Ok(Packet {
        header: Header::Long(LongHeader {
            packet_type,
            type_specific_bits,
            version,
            dcid,
            scid,
        }),
        payload: &datagram[offset..],
    })
}

/// Parse Short Header (RFC 9000 Section 17.3)
fn parse_short_header(datagram: &[u8], dcid_len: usize) -> Result<Packet<'_>> {
    let len = datagram.len();
    let first_byte = datagram[0];

    // Packet Number Length from first byte (bottom 2 bits)
    let pn_len = ((first_byte & PACKET_NUMBER_LENGTH_MASK) as usize) + 1;

    // Saturates for absurd configured lengths, which then simply never fit.
    let needed = MIN_SHORT_PACKET_LEN
        .saturating_add(dcid_len)
        .saturating_add(pn_len);
    if len < needed {
        return Err(Error::too_short(needed, len));
    }

    let mut offset = 1;
    let dcid = &datagram[offset..offset + dcid_len];
    offset += dcid_len;

    let packet_number = &datagram[offset..offset + pn_len];
    offset += pn_len;

    Ok(Packet {
        header: Header::Short(ShortHeader {
            spin: first_byte & SPIN_BIT != 0,
            key_phase: first_byte & KEY_PHASE_BIT != 0,
            dcid,
            packet_number,
        }),
        payload: &datagram[offset..],
    })
}

/// Parse only the first byte to determine header form.
///
/// Fast path for dispatch. Does not check the fixed bit.
pub fn peek_header_form(datagram: &[u8]) -> Result<HeaderForm> {
    match datagram.first() {
        Some(&first_byte) => Ok(HeaderForm::from_first_byte(first_byte)),
        None => Err(Error::too_short(1, 0)),
    }
}

/// Extract the destination connection ID without a full parse.
///
/// Used for connection demultiplexing. Only the bytes up to the end of the
/// DCID are required, so this can succeed on datagrams that [`parse`] rejects
/// for a later field.
pub fn extract_dcid(datagram: &[u8], short_dcid_len: usize) -> Result<&[u8]> {
    let first_byte = match datagram.first() {
        Some(&b) => b,
        None => return Err(Error::too_short(1, 0)),
    };

    if first_byte & FIXED_BIT == 0 {
        return Err(Error::InvalidFixedBit);
    }

    let (start, dcid_len): (usize, usize) = match HeaderForm::from_first_byte(first_byte) {
        HeaderForm::Long => {
            // Long Header: DCID length at byte 5, DCID starts at byte 6
            if datagram.len() < 6 {
                return Err(Error::too_short(6, datagram.len()));
            }
            (6, datagram[5] as usize)
        }
        // Short Header: DCID starts at byte 1
        HeaderForm::Short => (1, short_dcid_len),
    };

    let end = start.saturating_add(dcid_len);
    if datagram.len() < end {
        return Err(Error::too_short(end, datagram.len()));
    }

    Ok(&datagram[start..end])
}

// ============================================================================
// Unit Tests
// ============================================================================
