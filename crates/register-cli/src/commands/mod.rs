// crates/register-cli/src/commands/mod.rs - Operation handlers
//
// One module per operation. Read-only operations borrow the store; mutating
// ones borrow it mutably and persist it through the context before reporting
// success.

use anyhow::Result;
use register_core::AppointmentStore;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::cli::Command;
use crate::context::Context;
use crate::terminal::Terminal;

pub mod add;
pub mod delete;
pub mod search;
pub mod view_all;

/// Run one operation against the loaded store
pub fn dispatch<R: BufRead, W: Write>(
    command: Command,
    ctx: &Context,
    store: &mut AppointmentStore,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    debug!(command = command.name(), appointments = store.len(), "dispatching");

    match command {
        Command::ViewAll => view_all::handle(store, term),
        Command::Add => add::handle(ctx, store, term),
        Command::Delete => delete::handle(ctx, store, term),
        Command::Search => search::handle(store, term),
    }
}
