mod commands;
mod terminal;

use commands::{CommandLine, Commands, interfaces, wake};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    match commands.command {
        Commands::Wake { target, address } => wake::wake(target, address),
        Commands::Interfaces => interfaces::interfaces(),
    }
}
