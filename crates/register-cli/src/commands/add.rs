use anyhow::Result;
use register_core::validate::{is_valid_date, is_valid_name, is_valid_time, to_single_line};
use register_core::{AppointmentStore, NewAppointment};
use std::io::{BufRead, Write};
use tracing::info;

use crate::context::Context;
use crate::terminal::Terminal;

/// Collect a new appointment from the user, number it and save the store
///
/// Name, date and time are asked for again until they pass validation; the
/// reason is taken as typed, with any stray line breaks turned into spaces.
/// Nothing is stored if input ends part way.
pub fn handle<R: BufRead, W: Write>(
    ctx: &Context,
    store: &mut AppointmentStore,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let name = term.ask_until(
        "Enter name: ",
        "Invalid name. Use letters and spaces only.",
        is_valid_name,
    )?;
    let reason = to_single_line(&term.ask("Enter reason: ")?);
    let date = term.ask_until(
        "Enter date (DD/MM/YYYY): ",
        "Invalid date format. Use DD/MM/YYYY and make sure the date is valid.",
        is_valid_date,
    )?;
    let time = term.ask_until(
        "Enter time (HH:MM): ",
        "Invalid time format. Use HH:MM in 24-hour format.",
        is_valid_time,
    )?;

    let patient_no = store.add(NewAppointment {
        name,
        reason,
        date,
        time,
    })?;
    ctx.persist(store)?;

    info!(patient_no, "appointment added");
    term.say("Appointment added.")?;
    term.say(format!("Patient No: {}", patient_no))
}
