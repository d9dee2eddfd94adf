//! UDP echo peer with frame capture
//!
//! One task per channel receives datagrams, appends them to a shared
//! log, and sends the configured reply back to the sender. A silent
//! peer (no reply) exercises the client's reply timeout.

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Shared capture of received datagrams, oldest first
type FrameLog = Arc<Mutex<Vec<Vec<u8>>>>;

/// Behavior of the simulated peer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRadioConfig {
    /// Payload sent back for every received datagram. `None` makes the
    /// peer record frames but never reply.
    pub reply: Option<Vec<u8>>,
}

impl Default for SimRadioConfig {
    fn default() -> Self {
        // One arbitrary byte, like the end-to-end trace expects
        Self {
            reply: Some(vec![0xAA]),
        }
    }
}

impl SimRadioConfig {
    /// A peer that records frames but never replies
    pub fn silent() -> Self {
        Self { reply: None }
    }

    /// A peer that replies with the given payload
    pub fn replying(reply: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }
}

/// A simulated radio listening on loopback
pub struct SimRadio {
    control_addr: SocketAddr,
    civ_addr: SocketAddr,
    control_log: FrameLog,
    civ_log: FrameLog,
    tasks: Vec<JoinHandle<()>>,
}

impl SimRadio {
    /// Spawn a peer with the default one-byte echo reply
    pub async fn spawn() -> io::Result<Self> {
        Self::spawn_with(SimRadioConfig::default()).await
    }

    /// Spawn a peer with explicit behavior
    pub async fn spawn_with(config: SimRadioConfig) -> io::Result<Self> {
        let control = UdpSocket::bind("127.0.0.1:0").await?;
        let civ = UdpSocket::bind("127.0.0.1:0").await?;
        let control_addr = control.local_addr()?;
        let civ_addr = civ.local_addr()?;

        let control_log: FrameLog = Arc::new(Mutex::new(Vec::new()));
        let civ_log: FrameLog = Arc::new(Mutex::new(Vec::new()));

        let tasks = vec![
            tokio::spawn(echo_loop(
                control,
                "control",
                Arc::clone(&control_log),
                config.reply.clone(),
            )),
            tokio::spawn(echo_loop(civ, "civ", Arc::clone(&civ_log), config.reply)),
        ];

        debug!("sim radio up: control {}, civ {}", control_addr, civ_addr);
        Ok(Self {
            control_addr,
            civ_addr,
            control_log,
            civ_log,
            tasks,
        })
    }

    /// Address of the simulated control channel
    pub fn control_addr(&self) -> SocketAddr {
        self.control_addr
    }

    /// Address of the simulated CI-V tunnel
    pub fn civ_addr(&self) -> SocketAddr {
        self.civ_addr
    }

    /// Snapshot of datagrams received on the control channel
    pub fn control_frames(&self) -> Vec<Vec<u8>> {
        self.control_log.lock().unwrap().clone()
    }

    /// Snapshot of datagrams received on the CI-V tunnel
    pub fn civ_frames(&self) -> Vec<Vec<u8>> {
        self.civ_log.lock().unwrap().clone()
    }
}

impl Drop for SimRadio {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

async fn echo_loop(socket: UdpSocket, channel: &'static str, log: FrameLog, reply: Option<Vec<u8>>) {
    let mut buf = [0u8; 4096];
    loop {
        match socket.recv_from(&mut buf).await {
            Ok((n, from)) => {
                debug!("sim {}: {} bytes from {}", channel, n, from);
                log.lock().unwrap().push(buf[..n].to_vec());
                if let Some(reply) = &reply {
                    if let Err(e) = socket.send_to(reply, from).await {
                        warn!("sim {}: reply to {} failed: {}", channel, from, e);
                    }
                }
            }
            Err(e) => {
                warn!("sim {}: receive failed: {}", channel, e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn records_and_echoes() {
        let sim = SimRadio::spawn().await.unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client.send_to(b"\x10\x00\x03", sim.control_addr()).await.unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = timeout(Duration::from_secs(1), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&buf[..n], [0xAA]);
        assert_eq!(sim.control_frames(), vec![b"\x10\x00\x03".to_vec()]);
        assert!(sim.civ_frames().is_empty());
    }

    #[tokio::test]
    async fn silent_peer_records_without_replying() {
        let sim = SimRadio::spawn_with(SimRadioConfig::silent()).await.unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client.send_to(b"\xFE\xFD", sim.civ_addr()).await.unwrap();

        let mut buf = [0u8; 64];
        let reply = timeout(Duration::from_millis(200), client.recv_from(&mut buf)).await;
        assert!(reply.is_err());

        // Give the recv task a beat to log the frame
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(sim.civ_frames(), vec![b"\xFE\xFD".to_vec()]);
    }

    #[tokio::test]
    async fn custom_reply_payload() {
        let sim = SimRadio::spawn_with(SimRadioConfig::replying([0xDE, 0xAD, 0xBE, 0xEF]))
            .await
            .unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client.send_to(b"ping", sim.civ_addr()).await.unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = timeout(Duration::from_secs(1), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&buf[..n], [0xDE, 0xAD, 0xBE, 0xEF]);
    }
}
