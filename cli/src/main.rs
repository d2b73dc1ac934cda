mod commands;
mod terminal;

use ciphr_common::config::Config;
use commands::CommandLine;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config::new(commands.mode(), &commands.protocols, commands.quiet);

    commands::report::report(commands.input.as_deref(), &cfg)
}
