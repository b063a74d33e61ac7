use anyhow::Result;
use register_core::AppointmentStore;
use std::io::{BufRead, Write};

use crate::terminal::Terminal;

const SEPARATOR: &str = "--------------------------";

/// Print every appointment in store order, each followed by a separator line
pub fn handle<R: BufRead, W: Write>(
    store: &AppointmentStore,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    if store.is_empty() {
        return term.say("No appointments found.");
    }

    for appointment in store {
        term.say(appointment)?;
        term.say(SEPARATOR)?;
    }

    Ok(())
}
