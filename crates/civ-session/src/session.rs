//! Session bootstrap and command issue
//!
//! A [`RadioSession`] owns the two UDP sockets the IC-705 expects:
//! a control channel (radio port 50001) used only to establish the
//! session, and a CI-V serial tunnel (radio port 50002) that carries
//! CI-V command bytes. Bootstrap replays a fixed handshake on each
//! channel in strict sequence:
//!
//! - control: connect, ready, login, login
//! - CI-V tunnel: connect, ready
//!
//! Every send is followed by one bounded reply wait. Reply content is
//! not validated; any datagram counts as the reply and is printed to
//! stdout in hex. Dropping the session closes both sockets.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, info, trace, warn};

use crate::binder::bind_port_range;
use crate::config::RadioConfig;
use crate::error::SessionError;
use crate::frames;

/// Largest datagram the radio is expected to send
const RECV_BUF_LEN: usize = 4096;

/// A bootstrapped-or-not session against one radio
pub struct RadioSession {
    config: RadioConfig,
    control: Option<UdpSocket>,
    civ: Option<UdpSocket>,
}

impl RadioSession {
    /// Bind the local sockets described by `config`.
    ///
    /// A port range with no free port does not fail the session: the
    /// channel stays unbound and every phase that needs it is skipped,
    /// with a warning.
    pub async fn bind(config: RadioConfig) -> Self {
        let (low, high) = config.local_control_ports;
        let control = match bind_port_range(low, high).await {
            Ok(socket) => Some(socket),
            Err(e) => {
                warn!("control channel unavailable: {}", e);
                None
            }
        };

        let (low, high) = config.local_civ_ports;
        let civ = match bind_port_range(low, high).await {
            Ok(socket) => Some(socket),
            Err(e) => {
                warn!("CI-V tunnel unavailable: {}", e);
                None
            }
        };

        Self { config, control, civ }
    }

    /// Whether the control socket bound
    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    /// Whether the CI-V tunnel socket bound
    pub fn has_civ(&self) -> bool {
        self.civ.is_some()
    }

    /// Send one frame and wait for one reply datagram.
    ///
    /// The reply is printed verbatim (hex) to stdout and returned. No
    /// shape check is made against the expected acknowledge frames.
    async fn exchange(
        &self,
        socket: &UdpSocket,
        peer: SocketAddr,
        frame: &[u8],
        exchange: &'static str,
    ) -> Result<Vec<u8>, SessionError> {
        trace!("{}: sending {} bytes to {}", exchange, frame.len(), peer);
        socket
            .send_to(frame, peer)
            .await
            .map_err(|source| SessionError::Send { exchange, source })?;

        let mut buf = [0u8; RECV_BUF_LEN];
        match timeout(self.config.reply_timeout, socket.recv_from(&mut buf)).await {
            Ok(Ok((n, from))) => {
                let reply = buf[..n].to_vec();
                debug!("{}: {} byte reply from {}", exchange, n, from);
                println!("{}", frames::hex(&reply));
                Ok(reply)
            }
            Ok(Err(source)) => Err(SessionError::Recv { exchange, source }),
            Err(_) => Err(SessionError::ReplyTimeout {
                exchange,
                timeout_ms: self.config.reply_timeout.as_millis() as u64,
            }),
        }
    }

    /// Run the control handshake, then the CI-V tunnel handshake.
    ///
    /// Exactly four control frames (connect, ready, login, login) and
    /// two CI-V frames (connect, ready), in that order. A channel whose
    /// socket never bound is skipped.
    pub async fn bootstrap(&self) -> Result<(), SessionError> {
        if let Some(control) = &self.control {
            let peer = self.config.control_endpoint();
            info!("control handshake with {}", peer);
            self.exchange(control, peer, &self.config.frames.control_connect, "control connect")
                .await?;
            self.exchange(control, peer, &self.config.frames.control_ready, "control ready")
                .await?;
            // The radio wants the login frame twice.
            self.exchange(control, peer, &self.config.frames.control_login, "control login")
                .await?;
            self.exchange(control, peer, &self.config.frames.control_login, "control login")
                .await?;
        } else {
            warn!("skipping control handshake: no control socket");
        }

        if let Some(civ) = &self.civ {
            let peer = self.config.civ_endpoint();
            info!("CI-V tunnel handshake with {}", peer);
            self.exchange(civ, peer, &self.config.frames.civ_connect, "civ connect")
                .await?;
            self.exchange(civ, peer, &self.config.frames.civ_ready, "civ ready")
                .await?;
        } else {
            warn!("skipping CI-V handshake: no CI-V socket");
        }

        Ok(())
    }

    /// Send the literal set-frequency command over the CI-V tunnel.
    ///
    /// With no CI-V socket this is a logged no-op; the dependent send
    /// must not be attempted.
    pub async fn set_frequency(&self) -> Result<(), SessionError> {
        let Some(civ) = &self.civ else {
            warn!("skipping set-frequency: no CI-V socket");
            return Ok(());
        };

        let peer = self.config.civ_endpoint();
        self.exchange(civ, peer, &self.config.frames.set_frequency, "set frequency")
            .await?;
        Ok(())
    }

    /// Inert idle loop: sleep one second, repeat, forever.
    ///
    /// Never returns; cancel it by dropping the future.
    pub async fn idle(&self) {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            trace!("idle");
        }
    }
}
