//! Configured packet decoder.
//!
//! Binds the short header DCID length from [`DecoderConfig`] so per-datagram
//! call sites only pass bytes. Rejections are logged at `trace` level only;
//! the receive path must not log per packet above that.

use bytes::Bytes;

use crate::config::DecoderConfig;
use crate::error::{Error, Result};
use crate::header::Packet;
use crate::owned::OwnedPacket;
use crate::parser;

/// Stateless header decoder for one listener or connection.
///
/// Cheap to clone and safe to share across workers.
#[derive(Debug, Clone)]
pub struct PacketDecoder {
    config: DecoderConfig,
}

impl PacketDecoder {
    /// Create a decoder from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation messages if the configuration is invalid.
    pub fn new(config: DecoderConfig) -> std::result::Result<Self, Vec<String>> {
        config.validate()?;
        tracing::debug!(
            short_dcid_len = config.short_dcid_len,
            "Packet decoder created"
        );
        Ok(Self { config })
    }

    /// Short header DCID length in use.
    pub fn short_dcid_len(&self) -> usize {
        self.config.short_dcid_len
    }

    /// Active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a borrowed datagram. See [`parser::parse`].
    pub fn decode<'a>(&self, datagram: &'a [u8]) -> Result<Packet<'a>> {
        parser::parse(datagram, self.config.short_dcid_len)
            .inspect_err(|e| trace_rejection(datagram.len(), e))
    }

    /// Decode a reference-counted datagram into views that own a handle to it.
    pub fn decode_owned(&self, datagram: Bytes) -> Result<OwnedPacket> {
        let len = datagram.len();
        OwnedPacket::decode(datagram, self.config.short_dcid_len)
            .inspect_err(|e| trace_rejection(len, e))
    }

    /// Destination connection ID only. See [`parser::extract_dcid`].
    pub fn dcid<'a>(&self, datagram: &'a [u8]) -> Result<&'a [u8]> {
        parser::extract_dcid(datagram, self.config.short_dcid_len)
            .inspect_err(|e| trace_rejection(datagram.len(), e))
    }
}

fn trace_rejection(len: usize, error: &Error) {
    tracing::trace!(len, error = %error, "Dropping undecodable datagram");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    fn decoder(short_dcid_len: usize) -> PacketDecoder {
        PacketDecoder::new(DecoderConfig::with_short_dcid_len(short_dcid_len)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let errors = PacketDecoder::new(DecoderConfig::with_short_dcid_len(1000)).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_decode_uses_configured_dcid_len() {
        let datagram = [0x40, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

        let packet = decoder(2).decode(&datagram).unwrap();
        assert_eq!(packet.header.dcid(), &[0x01, 0x02]);
        assert_eq!(packet.header.packet_number(), Some(&[0x03][..]));
        assert_eq!(packet.payload, &[0x04, 0x05, 0x06, 0x07]);

        let packet = decoder(4).decode(&datagram).unwrap();
        assert_eq!(packet.header.dcid(), &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(packet.payload, &[0x06, 0x07]);

        assert!(decoder(5).decode(&datagram).unwrap_err().is_too_short());
    }

    #[test]
    fn test_decode_owned_matches_borrowed() {
        let datagram = Bytes::from_static(&[
            0xc0, 0x00, 0x00, 0x00, 0x01, 0x01, 0xaa, 0x01, 0xbb, 0x99,
        ]);
        let dec = decoder(8);

        let borrowed = dec.decode(&datagram).unwrap();
        let owned = dec.decode_owned(datagram.clone()).unwrap();

        assert!(matches!(borrowed.header, Header::Long(_)));
        assert_eq!(owned.header.dcid(), borrowed.header.dcid());
        assert_eq!(&owned.payload[..], borrowed.payload);
    }

    #[test]
    fn test_dcid_fast_path() {
        let dec = decoder(3);
        assert_eq!(dec.dcid(&[0x40, 0x01, 0x02, 0x03]).unwrap(), &[0x01, 0x02, 0x03]);
        assert_eq!(dec.dcid(&[0x00, 0x01, 0x02, 0x03]), Err(Error::InvalidFixedBit));
    }
}
