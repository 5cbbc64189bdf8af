//! # Wake Dispatch Service
//!
//! Implements the "wake a sleeping host" use case.
//!
//! One dispatch pass enumerates the viable interfaces, broadcasts a magic
//! packet on each of them, and folds the per-interface outcomes into a single
//! status. Wake-on-LAN is unacknowledged: `Sent` means the OS accepted the
//! datagram, never that the host actually powered on.

use std::io;
use std::net::{SocketAddrV4, UdpSocket};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use wakr_common::network::interface::{
    InterfaceQueryError, InterfaceSource, LanInterface, SystemInterfaces,
};
use wakr_common::network::target::WakeTarget;
use wakr_protocols::wol::MagicPacket;

/// Conventional Wake-on-LAN destination port.
pub const WAKE_PORT: u16 = 9;

/// A broadcast send that failed on one specific interface.
#[derive(Debug, Error)]
#[error("broadcast on {interface} failed: {source}")]
pub struct SendError {
    pub interface: String,
    #[source]
    pub source: io::Error,
}

/// Why a whole dispatch pass produced no wake signal.
#[derive(Debug, Error)]
pub enum WakeError {
    #[error(transparent)]
    InterfaceQuery(#[from] InterfaceQueryError),
    /// Every enumerated interface refused the datagram.
    #[error("wake signal could not be sent on any interface")]
    AllSendsFailed { causes: Vec<SendError> },
}

/// What happened on a single interface.
#[derive(Debug)]
pub enum WakeOutcome {
    Sent,
    Skipped,
    Error(SendError),
}

/// The aggregate result of one dispatch pass.
#[derive(Debug)]
pub enum WakeStatus {
    /// At least one interface accepted the datagram.
    Sent,
    /// No viable network path existed; nothing was attempted.
    Skipped,
    /// Every attempt failed, or the interfaces could not be enumerated.
    Error(WakeError),
}

/// Application service for waking hosts.
///
/// The interface source is injected so callers can substitute a fixed list
/// for the live OS query.
pub struct WakeService {
    interfaces: Box<dyn InterfaceSource>,
}

impl WakeService {
    pub fn new(interfaces: Box<dyn InterfaceSource>) -> Self {
        Self { interfaces }
    }

    /// A service backed by the live OS interface table.
    pub fn system() -> Self {
        Self::new(Box::new(SystemInterfaces))
    }

    /// Executes one dispatch pass against `target`.
    ///
    /// Interfaces are re-enumerated on every call. Every enumerated interface
    /// is attempted; a failure on one never stops the others. There are no
    /// retries, callers wanting another pass call `wake` again.
    pub fn wake(&self, target: &WakeTarget) -> WakeStatus {
        let interfaces = match self.interfaces.list_interfaces() {
            Ok(interfaces) => interfaces,
            Err(err) => {
                warn!("interface enumeration failed: {err}");
                return WakeStatus::Error(WakeError::InterfaceQuery(err));
            }
        };

        if interfaces.is_empty() {
            debug!("no viable interface, skipping wake of {target}");
            return WakeStatus::Skipped;
        }

        let packet = MagicPacket::new(target.mac);
        let outcomes: Vec<WakeOutcome> = interfaces
            .par_iter()
            .map(|interface| send_on_interface(interface, &packet))
            .collect();

        fold_outcomes(outcomes)
    }
}

/// One attempt: one socket, one datagram, socket released on every path.
fn send_on_interface(interface: &LanInterface, packet: &MagicPacket) -> WakeOutcome {
    match broadcast_packet(interface, packet) {
        Ok(()) => {
            debug!(
                "wake signal sent via {} to {}:{}",
                interface.name,
                interface.broadcast(),
                WAKE_PORT
            );
            WakeOutcome::Sent
        }
        Err(source) => {
            warn!("wake signal via {} failed: {source}", interface.name);
            WakeOutcome::Error(SendError {
                interface: interface.name.clone(),
                source,
            })
        }
    }
}

fn broadcast_packet(interface: &LanInterface, packet: &MagicPacket) -> io::Result<()> {
    // Binding to the interface address pins the datagram to this link.
    let socket = UdpSocket::bind(SocketAddrV4::new(interface.addr, 0))?;
    socket.set_broadcast(true)?;
    socket.send_to(
        packet.as_bytes(),
        SocketAddrV4::new(interface.broadcast(), WAKE_PORT),
    )?;
    Ok(())
}

/// Folds per-interface outcomes into the overall status.
///
/// One `Sent` anywhere wins: any single path reaching the adapter is enough,
/// and redundant broadcasts are harmless. The fold is commutative, so attempt
/// order never affects the result.
pub fn fold_outcomes(outcomes: Vec<WakeOutcome>) -> WakeStatus {
    if outcomes.is_empty() {
        return WakeStatus::Skipped;
    }

    let total = outcomes.len();
    let mut sent = false;
    let mut causes = Vec::new();

    for outcome in outcomes {
        match outcome {
            WakeOutcome::Sent => sent = true,
            WakeOutcome::Skipped => {}
            WakeOutcome::Error(cause) => causes.push(cause),
        }
    }

    if sent {
        WakeStatus::Sent
    } else if causes.len() == total {
        WakeStatus::Error(WakeError::AllSendsFailed { causes })
    } else {
        WakeStatus::Skipped
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
