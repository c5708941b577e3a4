//! `heroicons` command-line entry point.
use anyhow::Result;
use clap::{CommandFactory as _, Parser};

use heroicons_css::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    match args.command {
        cli::Command::Build(opts) => commands::build::run(&args.global, &opts, &log),
        cli::Command::List(opts) => commands::list::run(&args.global, &opts, &log),
        cli::Command::Show(opts) => commands::show::run(&args.global, &opts, &log),
        cli::Command::Check => commands::check::run(&args.global, &log),
        cli::Command::Completions(opts) => {
            clap_complete::generate(
                opts.shell,
                &mut cli::Cli::command(),
                "heroicons",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
