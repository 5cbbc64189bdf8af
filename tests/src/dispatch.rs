//! Service-level dispatch tests driven through fake interface sources,
//! exercising the same trait seam the live OS query plugs into.

use std::net::Ipv4Addr;

use pnet::util::MacAddr;
use wakr_common::network::interface::{InterfaceQueryError, InterfaceSource, LanInterface};
use wakr_common::network::target::WakeTarget;
use wakr_core::wake::{WakeError, WakeService, WakeStatus};

struct FixedInterfaces(Vec<LanInterface>);

impl InterfaceSource for FixedInterfaces {
    fn list_interfaces(&self) -> Result<Vec<LanInterface>, InterfaceQueryError> {
        Ok(self.0.clone())
    }
}

struct FailingQuery;

impl InterfaceSource for FailingQuery {
    fn list_interfaces(&self) -> Result<Vec<LanInterface>, InterfaceQueryError> {
        Err(InterfaceQueryError {
            reason: "interface table unavailable".to_string(),
        })
    }
}

fn target() -> WakeTarget {
    WakeTarget::new(MacAddr(0xde, 0xad, 0xbe, 0xef, 0x00, 0x01))
        .with_last_addr(Ipv4Addr::new(192, 168, 1, 50))
}

#[test]
fn airplane_mode_skips_instead_of_failing() {
    let service = WakeService::new(Box::new(FixedInterfaces(vec![])));

    match service.wake(&target()) {
        WakeStatus::Skipped => {}
        other => panic!("expected skip with no interfaces, got {other:?}"),
    }
}

#[test]
fn enumeration_failure_surfaces_its_cause() {
    let service = WakeService::new(Box::new(FailingQuery));

    match service.wake(&target()) {
        WakeStatus::Error(WakeError::InterfaceQuery(err)) => {
            assert!(err.to_string().contains("interface table unavailable"));
        }
        other => panic!("expected interface query error, got {other:?}"),
    }
}

#[test]
fn repeated_dispatch_is_stable() {
    let service = WakeService::new(Box::new(FixedInterfaces(vec![])));

    for _ in 0..3 {
        assert!(matches!(service.wake(&target()), WakeStatus::Skipped));
    }
}

#[test]
fn dispatch_sends_through_a_real_socket() {
    // A /32 loopback entry collapses the broadcast address onto 127.0.0.1,
    // so the send exercises the full socket path without leaving the machine.
    let service = WakeService::new(Box::new(FixedInterfaces(vec![LanInterface {
        name: "lo-scoped".to_string(),
        addr: Ipv4Addr::LOCALHOST,
        netmask: Ipv4Addr::new(255, 255, 255, 255),
    }])));

    assert!(matches!(service.wake(&target()), WakeStatus::Sent));
}
