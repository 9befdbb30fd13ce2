//! Outbound packet builders.
//!
//! Handlers never write to sockets themselves, they build packets with these
//! helpers and hand the bytes to a player's outbound queue.
//!
//! # Framing
//!
//! ```text
//! +---------+---------+-------------+-----------------+
//! | id: u16 | pad: u8 | length: u32 | payload         |
//! +---------+---------+-------------+-----------------+
//! ```
//!
//! Integers are little-endian. Strings inside a payload are written as `0x0b`,
//! the ULEB128 encoded byte length and the UTF-8 bytes, or a single `0x00` for
//! an empty string.

use std::fmt;

/// Identifier of a server packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PacketId(pub u16);

impl PacketId {
    pub const NOTIFICATION: PacketId = PacketId(24);
    pub const RTX: PacketId = PacketId(105);

    /// Human readable name of well known packets.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            5 => Some("USER_ID"),
            7 => Some("SEND_MESSAGE"),
            8 => Some("PONG"),
            24 => Some("NOTIFICATION"),
            26 => Some("UPDATE_MATCH"),
            36 => Some("MATCH_JOIN_SUCCESS"),
            64 => Some("CHANNEL_JOIN_SUCCESS"),
            71 => Some("PRIVILEGES"),
            83 => Some("USER_PRESENCE"),
            86 => Some("RESTART"),
            105 => Some("RTX"),
            _ => None,
        }
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "PACKET({})", self.0),
        }
    }
}

/// Frames `payload` behind the packet header.
pub fn write_packet(id: PacketId, payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(7 + payload.len());
    data.extend_from_slice(&id.0.to_le_bytes());
    data.push(0);
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// Builds a packet without payload.
pub fn write(id: PacketId) -> Vec<u8> {
    write_packet(id, &[])
}

/// Builds a notification packet, displayed by the client as a popup.
pub fn notification(message: &str) -> Vec<u8> {
    write_packet(PacketId::NOTIFICATION, &write_string(message))
}

/// Builds an RTX packet carrying `message`.
pub fn rtx(message: &str) -> Vec<u8> {
    write_packet(PacketId::RTX, &write_string(message))
}

fn write_string(s: &str) -> Vec<u8> {
    if s.is_empty() {
        return vec![0x00];
    }

    let mut data = vec![0x0b];
    write_uleb128(&mut data, s.len());
    data.extend_from_slice(s.as_bytes());
    data
}

fn write_uleb128(data: &mut Vec<u8>, mut value: usize) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            data.push(byte);
            return;
        }
        data.push(byte | 0x80);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_packet() {
        assert_eq!(write(PacketId(5)), vec![5, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_write_packet_id_is_little_endian() {
        assert_eq!(&write(PacketId(0x0102))[..2], &[0x02, 0x01]);
    }

    #[test]
    fn test_notification() {
        let packet = notification("hi");
        assert_eq!(packet, vec![24, 0, 0, 4, 0, 0, 0, 0x0b, 2, b'h', b'i']);
    }

    #[test]
    fn test_notification_empty_string() {
        assert_eq!(notification(""), vec![24, 0, 0, 1, 0, 0, 0, 0x00]);
    }

    #[test]
    fn test_rtx() {
        let packet = rtx("boo");
        assert_eq!(&packet[..2], &105u16.to_le_bytes());
        assert_eq!(&packet[7..], &[0x0b, 3, b'b', b'o', b'o']);
    }

    #[test]
    fn test_uleb128_multi_byte_length() {
        let message = "a".repeat(300);
        let packet = notification(&message);
        // 300 = 0b10_0101100 -> 0xac 0x02
        assert_eq!(&packet[7..10], &[0x0b, 0xac, 0x02]);
        assert_eq!(packet.len(), 7 + 3 + 300);
    }

    #[test]
    fn test_packet_id_display() {
        assert_eq!(PacketId::NOTIFICATION.to_string(), "NOTIFICATION(24)");
        assert_eq!(PacketId(999).to_string(), "PACKET(999)");
    }
}
