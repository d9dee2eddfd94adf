//! Session configuration
//!
//! All protocol parameters live in [`RadioConfig`] rather than in
//! module-level constants, so tests and embedders can point a session
//! at a simulated peer. The defaults are the addressing and frames
//! from the captured trace; the program itself takes no flags, config
//! files, or environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::frames;

/// Default radio address on the local WiFi network
const DEFAULT_RADIO_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 2, 19));
/// Radio-side UDP port for the control channel
const DEFAULT_CONTROL_PORT: u16 = 50001;
/// Radio-side UDP port for the CI-V serial tunnel
const DEFAULT_CIV_PORT: u16 = 50002;
/// Local port the radio expects the control channel to come from
const DEFAULT_LOCAL_CONTROL_PORT: u16 = 62048;
/// Local port the radio expects the CI-V tunnel to come from
const DEFAULT_LOCAL_CIV_PORT: u16 = 51847;

/// The literal frames a session replays, in the order it sends them.
///
/// Defaults are the captured trace constants from [`frames`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTable {
    /// Control channel: open the session
    pub control_connect: Vec<u8>,
    /// Control channel: ready exchange
    pub control_ready: Vec<u8>,
    /// Control channel: login, sent twice
    pub control_login: Vec<u8>,
    /// CI-V tunnel: open the tunnel
    pub civ_connect: Vec<u8>,
    /// CI-V tunnel: ready exchange
    pub civ_ready: Vec<u8>,
    /// CI-V tunnel: the one command this client issues
    pub set_frequency: Vec<u8>,
}

impl Default for FrameTable {
    fn default() -> Self {
        Self {
            control_connect: frames::CONTROL_CONNECT.to_vec(),
            control_ready: frames::CONTROL_READY.to_vec(),
            control_login: frames::CONTROL_LOGIN.to_vec(),
            civ_connect: frames::CIV_CONNECT.to_vec(),
            civ_ready: frames::CIV_READY.to_vec(),
            set_frequency: frames::SET_FREQUENCY.to_vec(),
        }
    }
}

/// Addressing, timing, and frame table for one radio session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioConfig {
    /// IP address of the radio
    pub radio_addr: IpAddr,
    /// Radio-side control channel port
    pub control_port: u16,
    /// Radio-side CI-V tunnel port
    pub civ_port: u16,
    /// Inclusive local port range for the control socket
    pub local_control_ports: (u16, u16),
    /// Inclusive local port range for the CI-V socket
    pub local_civ_ports: (u16, u16),
    /// Bound on every reply wait
    pub reply_timeout: Duration,
    /// Frames to replay
    pub frames: FrameTable,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            radio_addr: DEFAULT_RADIO_ADDR,
            control_port: DEFAULT_CONTROL_PORT,
            civ_port: DEFAULT_CIV_PORT,
            local_control_ports: (DEFAULT_LOCAL_CONTROL_PORT, DEFAULT_LOCAL_CONTROL_PORT),
            local_civ_ports: (DEFAULT_LOCAL_CIV_PORT, DEFAULT_LOCAL_CIV_PORT),
            reply_timeout: Duration::from_secs(5),
            frames: FrameTable::default(),
        }
    }
}

impl RadioConfig {
    /// Control channel endpoint on the radio
    pub fn control_endpoint(&self) -> SocketAddr {
        SocketAddr::new(self.radio_addr, self.control_port)
    }

    /// CI-V tunnel endpoint on the radio
    pub fn civ_endpoint(&self) -> SocketAddr {
        SocketAddr::new(self.radio_addr, self.civ_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_trace_addressing() {
        let config = RadioConfig::default();
        assert_eq!(config.radio_addr.to_string(), "192.168.2.19");
        assert_eq!(config.control_endpoint().port(), 50001);
        assert_eq!(config.civ_endpoint().port(), 50002);
        assert_eq!(config.local_control_ports, (62048, 62048));
        assert_eq!(config.local_civ_ports, (51847, 51847));
    }

    #[test]
    fn default_frame_table_uses_trace_frames() {
        let table = FrameTable::default();
        assert_eq!(table.control_connect, frames::CONTROL_CONNECT);
        assert_eq!(table.control_login.len(), 39);
        assert_eq!(table.set_frequency, frames::SET_FREQUENCY);
    }
}
