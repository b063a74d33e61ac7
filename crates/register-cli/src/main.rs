// crates/register-cli/src/main.rs - CLI Application Entry Point
//
// One invocation runs exactly one operation:
//
//   pick operation from argv[1] ──▶ load store ──▶ run it ──▶ (add/delete) save ──▶ exit
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (argv + stdin)  │    │ (cli.rs, main)   │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │   register-core     │
//                        │ (config + I/O)   │    │ (validate, store)   │
//                        └──────────────────┘    └─────────────────────┘
//
// RUST PATTERNS USED:
// - The store is an owned value lent to each handler (`&` or `&mut`), never global
// - Typed errors in the core crate, `anyhow` with context at this boundary
// - Handlers are generic over `BufRead`/`Write` so tests drive them from memory
//
// MODULES:
// - cli: argument definitions and the command table
// - commands: one handler per operation
// - context: validated configuration plus load/persist helpers
// - terminal: prompts and output over any reader/writer pair
//
// EXAMPLE USAGE:
// ```bash
// appointments add        # prompts for name, reason, date and time
// appointments view_all
// appointments search     # prompts for a patient number
// appointments delete     # prompts for a patient number
// ```
//
// EXIT CODES:
// - 0: the operation ran (including "not found" answers and unknown commands)
// - 1: no command given, or an error such as a failed save

use anyhow::Result;
use clap::Parser;
use console::style;
use register_core::RegisterConfig;
use std::io;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod commands;
mod context;
mod terminal;

use cli::{Cli, Command, USAGE};
use context::Context;
use terminal::Terminal;

/// Main entry point - orchestration only
///
/// 1. Parse arguments with clap
/// 2. Build and validate the context, then install logging
/// 3. Answer a missing or unknown command with the usage line
/// 4. Load the store and hand it to the chosen handler
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let ctx = Context::new(RegisterConfig::default())?;
    init_logging(ctx.config().log_level);

    // Resolve the command before touching the data file, so usage answers
    // never depend on whether the file can be parsed
    let Some(name) = cli.command.as_deref() else {
        println!("{}", USAGE);
        eprintln!("{} no command given", style("error:").for_stderr().red().bold());
        return Ok(ExitCode::FAILURE);
    };

    let Some(command) = Command::from_name(name) else {
        println!("Unknown command: {}", name);
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    };

    let mut store = ctx.load_store()?;

    // Prompts and listings share one terminal over locked stdin and stdout
    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    commands::dispatch(command, &ctx, &mut store, &mut term)?;

    Ok(ExitCode::SUCCESS)
}

/// Send diagnostics to stderr so they never mix with prompts and listings
fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
