use std::net::Ipv4Addr;

use anyhow::Context;
use tracing::{info, warn};

use wakr_common::network::target::WakeTarget;
use wakr_core::wake::{WakeService, WakeStatus};

/// Dispatches one wake pass and maps the status to user-facing messaging.
///
/// `Sent` only means the signal left this machine; Wake-on-LAN carries no
/// acknowledgment, so the host may still be off.
pub fn wake(target: WakeTarget, address: Option<Ipv4Addr>) -> anyhow::Result<()> {
    let target = match address {
        Some(addr) => target.with_last_addr(addr),
        None => target,
    };

    let service = WakeService::system();

    match service.wake(&target) {
        WakeStatus::Sent => {
            info!("wake signal sent to {target}");
            Ok(())
        }
        WakeStatus::Skipped => {
            warn!("no network path available, wake of {target} skipped");
            Ok(())
        }
        WakeStatus::Error(err) => {
            Err(err).context(format!("could not send wake signal to {target}"))
        }
    }
}
