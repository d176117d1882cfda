mod commands;
mod terminal;

use commands::{CommandLine, Commands, run, targets};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.quiet);

    match commands.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            print::header("running every scenario", cfg.quiet);
            run::run(&cfg).await
        }
        Commands::Targets { target } => {
            print::header("known targets", cfg.quiet);
            targets::targets(target);
            Ok(())
        }
    }
}
