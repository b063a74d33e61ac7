use anyhow::Result;
use register_core::AppointmentStore;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::terminal::Terminal;

/// Ask for a patient number and print the matching appointment
pub fn handle<R: BufRead, W: Write>(
    store: &AppointmentStore,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let patient_no = term.ask_patient_no("Enter patient number to search: ")?;

    match patient_no.and_then(|n| store.find(n)) {
        Some(appointment) => term.say(appointment),
        None => {
            debug!(?patient_no, "no appointment with this patient number");
            term.say("Appointment not found.")
        }
    }
}
