//! Local UDP port binding
//!
//! The radio expects the control and CI-V channels to originate from
//! specific local ports, so sockets are bound by walking an inclusive
//! port range in ascending order and taking the first port that binds.
//! This is the only retry-like logic in the client, and it retries over
//! ports, not over network failures.

use tokio::net::UdpSocket;
use tracing::trace;

use crate::error::SessionError;

/// Bind a fresh UDP socket to the first free port in `[low, high]`.
///
/// Ports that fail to bind (typically already in use) are skipped.
/// An exhausted range yields [`SessionError::NoFreePort`].
pub async fn bind_port_range(low: u16, high: u16) -> Result<UdpSocket, SessionError> {
    for port in low..=high {
        match UdpSocket::bind(("0.0.0.0", port)).await {
            Ok(socket) => {
                trace!("bound local UDP port {}", port);
                return Ok(socket);
            }
            Err(e) => trace!("port {} unavailable: {}", port, e),
        }
    }
    Err(SessionError::NoFreePort { low, high })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_single_free_port() {
        // Let the OS pick a port, release it, then ask for exactly it.
        let probe = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let socket = bind_port_range(port, port).await.unwrap();
        assert_eq!(socket.local_addr().unwrap().port(), port);
    }

    #[tokio::test]
    async fn skips_busy_port_and_takes_next_free() {
        let holder = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        let busy = holder.local_addr().unwrap().port();

        let socket = bind_port_range(busy, busy.saturating_add(10)).await.unwrap();
        let bound = socket.local_addr().unwrap().port();
        assert_ne!(bound, busy);
        assert!(bound > busy && bound <= busy.saturating_add(10));
    }

    #[tokio::test]
    async fn exhausted_range_is_an_error() {
        let holder = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        let busy = holder.local_addr().unwrap().port();

        let err = bind_port_range(busy, busy).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::NoFreePort { low, high } if low == busy && high == busy
        ));
    }
}
