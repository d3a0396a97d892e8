mod commands;
mod terminal;

use std::io::IsTerminal;

use commands::{CommandLine, Commands, decode, derive};
use duidgen_core::DuidType;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    if commands.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let command = commands.command.clone().unwrap_or(Commands::All);
    let types: &[DuidType] = match &command {
        Commands::All => &DuidType::ALL,
        Commands::Llt => &[DuidType::Llt],
        Commands::En => &[DuidType::En],
        Commands::Ll => &[DuidType::Ll],
        Commands::Uuid => &[DuidType::Uuid],
        Commands::Decode { duid } => return decode::decode(duid, commands.quiet),
    };

    let cfg = derive::build_config(&commands)?;
    derive::derive(&commands, cfg, types)
}
