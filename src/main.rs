use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pokelist::cli::Args;
use pokelist::logging::init_tracing;
use pokelist::plain::run_plain;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args
        .load_config()
        .context("Failed to load configuration")?;
    init_tracing(args.plain);

    if args.plain {
        let ok = run_plain(&config, &mut io::stdout().lock())?;
        return Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    pokelist::ui::run(&config)?;
    Ok(ExitCode::SUCCESS)
}
