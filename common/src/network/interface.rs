//! # Interface Enumeration
//!
//! Lists the machine's active IPv4 network interfaces and computes, for each,
//! the subnet broadcast address a wake signal has to be sent to.
//!
//! Enumeration runs fresh on every call. Links come and go between wake
//! attempts, so nothing here is cached.

use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use thiserror::Error;
use tracing::trace;

/// Why an interface was rejected during enumeration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// The interface is a loopback device.
    IsLoopback,
    /// The interface has no IPv4 network to broadcast into.
    NoIpv4Network,
}

/// The OS refused to report network interfaces at all.
///
/// Distinct from an empty interface list: a machine with no active links is
/// a valid state, a failed query is not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not query network interfaces: {reason}")]
pub struct InterfaceQueryError {
    pub reason: String,
}

/// An active IPv4 interface a broadcast datagram can leave through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanInterface {
    pub name: String,
    pub addr: Ipv4Addr,
    pub netmask: Ipv4Addr,
}

impl LanInterface {
    /// The subnet broadcast address: every host bit the netmask leaves open, set.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.netmask)
    }
}

/// Computes `addr | !netmask`.
pub fn broadcast_addr(addr: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) | !u32::from(netmask))
}

/// Where a wake dispatch gets its interfaces from.
///
/// The dispatcher pulls interfaces through this trait instead of querying the
/// OS directly, so tests can substitute a fixed list and a failed query stays
/// distinguishable from "no active interfaces".
pub trait InterfaceSource {
    fn list_interfaces(&self) -> Result<Vec<LanInterface>, InterfaceQueryError>;
}

/// The live OS interface table, queried through [`pnet::datalink`].
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn list_interfaces(&self) -> Result<Vec<LanInterface>, InterfaceQueryError> {
        Ok(viable_lan_interfaces(datalink::interfaces()))
    }
}

/// Filters a raw interface table down to broadcast-capable IPv4 entries.
///
/// OS enumeration order is preserved; callers must not attach meaning to it.
pub fn viable_lan_interfaces(interfaces: Vec<NetworkInterface>) -> Vec<LanInterface> {
    interfaces
        .into_iter()
        .filter(|interface| match check_viability(interface) {
            Ok(()) => true,
            Err(reason) => {
                trace!("discarding {}: {:?}", interface.name, reason);
                false
            }
        })
        .flat_map(lan_entries)
        .collect()
}

fn check_viability(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    let has_ipv4 = interface
        .ips
        .iter()
        .any(|net| matches!(net, IpNetwork::V4(_)));
    if !has_ipv4 {
        return Err(ViabilityError::NoIpv4Network);
    }

    Ok(())
}

/// One entry per IPv4 network: an interface holding several addresses can
/// reach several subnets.
fn lan_entries(interface: NetworkInterface) -> Vec<LanInterface> {
    interface
        .ips
        .iter()
        .filter_map(|net| match net {
            IpNetwork::V4(v4) => Some(LanInterface {
                name: interface.name.clone(),
                addr: v4.ip(),
                netmask: v4.mask(),
            }),
            IpNetwork::V6(_) => None,
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
