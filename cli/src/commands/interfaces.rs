use colored::*;
use tracing::info;

use wakr_common::network::interface::{InterfaceSource, SystemInterfaces};

/// Prints the interfaces a wake dispatch would broadcast on, with the
/// computed broadcast address for each.
pub fn interfaces() -> anyhow::Result<()> {
    let interfaces = SystemInterfaces.list_interfaces()?;

    if interfaces.is_empty() {
        info!("no viable IPv4 interface");
        return Ok(());
    }

    for interface in interfaces {
        info!(
            "{} {} netmask {} broadcast {}",
            interface.name.bold(),
            interface.addr.to_string().green(),
            interface.netmask,
            interface.broadcast().to_string().yellow()
        );
    }

    Ok(())
}
