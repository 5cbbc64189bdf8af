pub mod interfaces;
pub mod wake;

use std::net::Ipv4Addr;

use clap::{Parser, Subcommand};
use wakr_common::network::target::WakeTarget;

#[derive(Parser)]
#[command(name = "wakr")]
#[command(about = "Send Wake-on-LAN signals to hosts on the local network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Log every per-interface attempt
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Broadcast a wake signal for the given MAC address
    #[command(alias = "w")]
    Wake {
        target: WakeTarget,
        /// Last known IPv4 address of the host, shown in logs only
        #[arg(long)]
        address: Option<Ipv4Addr>,
    },
    /// List the interfaces a wake signal would leave through
    #[command(alias = "i")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
