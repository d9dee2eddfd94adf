//! CI-V-over-UDP Session Client
//!
//! This crate speaks the UDP remote-control transport of the Icom
//! IC-705: a control channel used to establish a session and a CI-V
//! serial tunnel that carries command bytes, both plain UDP. The
//! payloads are literal frames captured from a packet trace — there is
//! no frame encoder, no keepalive engine, and no ack state machine,
//! and replies are accepted whatever their content.
//!
//! # Architecture
//!
//! - [`binder`]: binds local sockets by walking an inclusive port range
//! - [`config`]: addressing, timing, and the replayed frame table
//! - [`session`]: the handshake sequences and the one issued command
//! - [`frames`]: the captured byte constants
//!
//! # Example
//!
//! ```rust,no_run
//! use civ_session::{RadioConfig, RadioSession};
//!
//! # async fn run() -> Result<(), civ_session::SessionError> {
//! let session = RadioSession::bind(RadioConfig::default()).await;
//! session.bootstrap().await?;
//! session.set_frequency().await?;
//! session.idle().await;
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod config;
pub mod error;
pub mod frames;
pub mod session;

pub use binder::bind_port_range;
pub use config::{FrameTable, RadioConfig};
pub use error::SessionError;
pub use session::RadioSession;
