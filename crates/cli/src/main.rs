use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use yapt_core::config;
use yapt_core::error::{Error, Result};
use yapt_core::install::InstallCommand;
use yapt_core::listing::SearchListing;
use yapt_core::search::{SearchCommand, SearchOutcome};

use yapt_cli::cli_args::Args;
use yapt_cli::input::read_selection;
use yapt_cli::interrupt::install_interrupt_handler;
use yapt_cli::render::{render_instructions, render_listing};

fn execute() -> Result<()> {
    let args = Args::parse();

    let scheme = config::load_color_scheme(args.nocolor, &args.config)?;

    let lines = match SearchCommand::new(&args.pkg).run(args.encoding.into())? {
        SearchOutcome::NoResults => {
            println!("No results");
            return Ok(());
        }
        SearchOutcome::Lines(lines) => lines,
    };

    let listing = SearchListing::from_lines(lines);
    debug!("Found {} packages", listing.len());

    println!("{}", render_listing(&listing, scheme.as_ref()));
    println!("{}", render_instructions(scheme.as_ref()));

    let selection = read_selection(&mut stdin().lock())?;
    let command = InstallCommand::for_selection(&selection, listing.packages(), args.noconfirm)?;

    if args.debug {
        println!("{command}");
        return Ok(());
    }

    command.execute()
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = install_interrupt_handler() {
        warn!("Could not install Ctrl-C handler: {e}");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        // Nothing typed: leave quietly
        Err(Error::EmptySelection) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
