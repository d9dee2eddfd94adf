//! Simulated IC-705 Network Peer
//!
//! This crate provides a loopback stand-in for the radio so the UDP
//! session client can be tested without hardware. The simulated peer
//! binds a control socket and a CI-V socket, answers every datagram
//! with a configurable payload, and records everything it receives per
//! channel.
//!
//! # Example
//!
//! ```rust,no_run
//! use civ_sim::SimRadio;
//!
//! # async fn run() -> std::io::Result<()> {
//! let sim = SimRadio::spawn().await?;
//! println!("control at {}", sim.control_addr());
//! println!("CI-V at {}", sim.civ_addr());
//! // ... point a session at those addresses ...
//! let seen = sim.control_frames();
//! # Ok(())
//! # }
//! ```

pub mod peer;

pub use peer::{SimRadio, SimRadioConfig};
