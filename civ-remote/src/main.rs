//! CI-V-over-UDP Remote Control Client
//!
//! Connects to a network-attached IC-705, replays the captured session
//! handshake on the control channel and the CI-V serial tunnel, issues
//! one set-frequency command (144.200 MHz), and idles. All addressing
//! and payloads come from a packet trace: radio at 192.168.2.19,
//! control on UDP 50001, CI-V tunnel on UDP 50002, local ports 62048
//! and 51847. There are no flags; received datagrams print to stdout
//! in hex.

use anyhow::Result;
use civ_session::{RadioConfig, RadioSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civ_remote=info,civ_session=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RadioConfig::default();
    tracing::info!(
        "connecting to IC-705 at {} (control {}, CI-V {})",
        config.radio_addr,
        config.control_port,
        config.civ_port
    );

    let session = RadioSession::bind(config).await;
    session.bootstrap().await?;
    session.set_frequency().await?;

    tracing::info!("session up, idling (ctrl-C to quit)");
    session.idle().await;
    Ok(())
}
