//! schemalens CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use schemalens::cli::args::*;
use schemalens::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = SchemaLensArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .parse_env("SCHEMALENS_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let command = command_name(&args.command);
    if let Err(e) = execute_command(args).with_context(|| format!("{command} failed")) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Process(_) => "process",
        Command::Suggest(_) => "suggest",
        Command::Variations(_) => "variations",
        Command::Select(_) => "select",
        Command::Vocabulary(_) => "vocabulary",
        Command::Interactive(_) => "interactive",
    }
}
