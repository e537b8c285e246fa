//! # whatstat CLI
//!
//! Command-line interface for the whatstat library.

use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use whatstat::WhatstatError;
use whatstat::cli::Args;
use whatstat::core::{StopWords, write_records_csv};
use whatstat::format::render_report;
use whatstat::session::Session;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), WhatstatError> {
    let session = Session::open(&args.input)?;
    info!(
        input = %args.input.display(),
        records = session.len(),
        "parsed transcript"
    );

    if args.list_users {
        for option in session.sender_options() {
            println!("{}", option);
        }
        return Ok(());
    }

    let filter = session.select(args.view())?;

    let stop_words = match &args.stop_words {
        Some(path) => StopWords::load(path)?,
        None => StopWords::default(),
    };

    if let Some(path) = &args.export_csv {
        write_records_csv(session.records(), path)?;
        debug!(path = %path.display(), "wrote records");
    }

    let report = session.report(&filter, &stop_words, &args.analysis_config());
    print!("{}", render_report(&report, args.format.into())?);

    Ok(())
}
