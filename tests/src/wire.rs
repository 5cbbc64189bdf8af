//! Observes the magic packet through a real UDP socket pair to pin down the
//! externally visible wire format: one datagram, 102 bytes, bit-exact.

use std::net::UdpSocket;
use std::time::Duration;

use pnet::util::MacAddr;
use wakr_protocols::wol::{MAGIC_PACKET_LEN, MagicPacket};

#[test]
fn payload_arrives_bit_exact() {
    let receiver = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
    receiver
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    let destination = receiver.local_addr().expect("receiver addr");

    let mac = MacAddr(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46);
    let packet = MagicPacket::new(mac);

    let sender = UdpSocket::bind("127.0.0.1:0").expect("bind sender");
    let written = sender
        .send_to(packet.as_bytes(), destination)
        .expect("send payload");
    assert_eq!(written, MAGIC_PACKET_LEN);

    let mut buffer = [0u8; 256];
    let (received, _) = receiver.recv_from(&mut buffer).expect("receive payload");

    assert_eq!(received, 102);
    assert_eq!(&buffer[..6], &[0xff; 6]);
    for repetition in buffer[6..102].chunks(6) {
        assert_eq!(repetition, &[0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46]);
    }
}
