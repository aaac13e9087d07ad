#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = quicd_packet::peek_header_form(data);

    // Short header DCID length is out-of-band, so try the common range
    for dcid_len in 0..=20 {
        if let Ok(packet) = quicd_packet::parse(data, dcid_len) {
            assert_eq!(packet.header.wire_len() + packet.payload.len(), data.len());
        }
        let _ = quicd_packet::extract_dcid(data, dcid_len);
    }

    let datagram = bytes::Bytes::copy_from_slice(data);
    let _ = quicd_packet::OwnedPacket::decode(datagram, 8);
});
