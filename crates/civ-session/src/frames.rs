//! Literal wire frames captured from an IC-705 packet trace
//!
//! Every payload the client sends is a fixed byte sequence replayed
//! verbatim; none of them is built by an encoder. The CI-V command
//! frames follow the usual `FE FE <to> <from> <cmd> ... FD` layout,
//! the UDP session frames are opaque.

/// First frame sent to the control port (50001) to open a session.
pub const CONTROL_CONNECT: [u8; 16] = [
    0x10, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x60, 0xF2, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// "Are you ready" frame, sent after the connect reply arrives.
pub const CONTROL_READY: [u8; 16] = [
    0x10, 0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x60, 0xF2, 0x00, 0x00, 0x2A, 0x86, 0x1F, 0x2F,
];

/// Login frame. The radio expects to see this twice in a row.
pub const CONTROL_LOGIN: [u8; 39] = [
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60, 0xF2, 0x00, 0x00, 0x2A, 0x86, 0x1F,
    0x2F, 0x00, 0x00, 0x00, 0x70, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x5A, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Opens the CI-V serial tunnel on the CI-V port (50002).
pub const CIV_CONNECT: [u8; 16] = [
    0x10, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x87, 0xCA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// "Ready" frame for the CI-V serial tunnel.
pub const CIV_READY: [u8; 16] = [
    0x10, 0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x87, 0xCA, 0x00, 0x00, 0x28, 0xBC, 0x6D, 0xF5,
];

/// CI-V set-frequency command: dial to 144.200 MHz (little-endian BCD).
pub const SET_FREQUENCY: [u8; 11] = [
    0xFE, 0xFE, 0xAC, 0xE0, 0x05, 0x00, 0x00, 0x20, 0x44, 0x01, 0xFD,
];

/// CI-V read-frequency command. Captured in the trace but not sent by
/// the main flow; exported for embedders.
pub const GET_FREQUENCY: [u8; 6] = [0xFE, 0xFE, 0xAC, 0xE0, 0x03, 0xFD];

/// Command-acknowledge reply shape seen in the trace.
///
/// The session deliberately does not validate replies against this;
/// any datagram is accepted (see crate docs).
pub const COMMAND_ACK: [u8; 12] = [
    0x01, 0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Receive-acknowledge reply shape seen in the trace. Unvalidated,
/// like [`COMMAND_ACK`].
pub const RECEIVE_ACK: [u8; 10] = [0x01, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x04, 0x00];

/// Format a datagram as space-separated uppercase hex bytes.
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_frequency_frame_matches_trace() {
        assert_eq!(
            SET_FREQUENCY,
            [0xFE, 0xFE, 0xAC, 0xE0, 0x05, 0x00, 0x00, 0x20, 0x44, 0x01, 0xFD]
        );
    }

    #[test]
    fn civ_frames_are_terminated() {
        assert_eq!(SET_FREQUENCY[0], 0xFE);
        assert_eq!(SET_FREQUENCY[1], 0xFE);
        assert_eq!(*SET_FREQUENCY.last().unwrap(), 0xFD);
        assert_eq!(*GET_FREQUENCY.last().unwrap(), 0xFD);
    }

    #[test]
    fn hex_formats_uppercase_with_spaces() {
        assert_eq!(hex(&[0xFE, 0x00, 0x2A]), "FE 00 2A");
        assert_eq!(hex(&[]), "");
    }
}
