//! # Wake Target Model
//!
//! A host to wake: the MAC address its network adapter listens for, plus the
//! last IPv4 address it was reached at. The address is log context only,
//! broadcast delivery never uses it.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::util::MacAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTarget {
    pub mac: MacAddr,
    pub last_addr: Option<Ipv4Addr>,
}

impl WakeTarget {
    pub fn new(mac: MacAddr) -> Self {
        Self {
            mac,
            last_addr: None,
        }
    }

    pub fn with_last_addr(mut self, addr: Ipv4Addr) -> Self {
        self.last_addr = Some(addr);
        self
    }
}

impl FromStr for WakeTarget {
    type Err = String;

    /// Parses a colon-separated MAC address (e.g. `a8:a1:59:13:41:46`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mac = s
            .parse::<MacAddr>()
            .map_err(|e| format!("invalid MAC address '{s}': {e}"))?;
        Ok(Self::new(mac))
    }
}

impl fmt::Display for WakeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_addr {
            Some(addr) => write!(f, "{} (last seen at {})", self.mac, addr),
            None => write!(f, "{}", self.mac),
        }
    }
}
