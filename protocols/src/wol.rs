//! # Wake-on-LAN Magic Packet
//!
//! The payload a compliant network adapter matches on while its host is
//! powered down: six `0xFF` synchronization bytes followed by the target MAC
//! repeated sixteen times, 102 bytes total. Adapters match the pattern
//! byte-for-byte, so the layout must be bit-exact.

use pnet::util::MacAddr;

const MAC_LEN: usize = 6;
const MAC_REPETITIONS: usize = 16;
const SYNC_STREAM: [u8; MAC_LEN] = [0xff; MAC_LEN];

/// Total payload size: 6 + 16 * 6.
pub const MAGIC_PACKET_LEN: usize = MAC_LEN + MAC_REPETITIONS * MAC_LEN;

/// An immutable, fully constructed magic packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicPacket {
    payload: [u8; MAGIC_PACKET_LEN],
}

impl MagicPacket {
    /// Builds the packet for `mac`. The same MAC always yields the same
    /// 102 bytes.
    pub fn new(mac: MacAddr) -> Self {
        let mut payload = [0u8; MAGIC_PACKET_LEN];
        payload[..MAC_LEN].copy_from_slice(&SYNC_STREAM);

        let octets = [mac.0, mac.1, mac.2, mac.3, mac.4, mac.5];
        for repetition in payload[MAC_LEN..].chunks_exact_mut(MAC_LEN) {
            repetition.copy_from_slice(&octets);
        }

        Self { payload }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }
}
