use anyhow::Result;
use register_core::AppointmentStore;
use std::io::{BufRead, Write};
use tracing::info;

use crate::context::Context;
use crate::terminal::Terminal;

/// Ask for a patient number and remove that appointment
///
/// The store is written back whether or not anything was removed.
pub fn handle<R: BufRead, W: Write>(
    ctx: &Context,
    store: &mut AppointmentStore,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let patient_no = term.ask_patient_no("Enter patient number to delete: ")?;
    let removed = patient_no.and_then(|n| store.remove(n));
    ctx.persist(store)?;

    match removed {
        Some(appointment) => {
            info!(
                patient_no = appointment.patient_no,
                name = %appointment.name,
                "appointment deleted"
            );
            term.say("Appointment deleted.")
        }
        None => term.say("Appointment not found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, temp_context, terminal};
    use std::fs;

    const THREE: &str = "3\n1\nAda Lovelace\nHeadache\n01/03/2025 09:00\n\
                         2\nAlan Turing\nFollow up\n02/03/2025 10:30\n\
                         3\nGrace Hopper\nCheckup\n03/03/2025 16:45\n";

    #[test]
    fn test_delete_middle_record() {
        let (_dir, ctx) = temp_context();
        fs::write(ctx.data_file(), THREE).unwrap();
        let mut store = ctx.load_store().unwrap();

        let mut term = terminal("2\n");
        handle(&ctx, &mut store, &mut term).unwrap();
        assert!(output(term).ends_with("Appointment deleted.\n"));

        let numbers: Vec<u32> = store.iter().map(|a| a.patient_no).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(ctx.load_store().unwrap(), store);
    }

    #[test]
    fn test_zero_is_not_found() {
        let (_dir, ctx) = temp_context();
        let mut store = AppointmentStore::parse(THREE).unwrap();

        let mut term = terminal("0\n");
        handle(&ctx, &mut store, &mut term).unwrap();

        let out = output(term);
        assert!(out.ends_with("Appointment not found.\n"));
        assert!(!out.contains("Invalid patient number"));
        assert_eq!(store.len(), 3);
        assert_eq!(fs::read_to_string(ctx.data_file()).unwrap(), THREE);
    }

    #[test]
    fn test_not_found_still_persists() {
        let (_dir, ctx) = temp_context();
        let mut store = AppointmentStore::parse(THREE).unwrap();
        assert!(!ctx.data_file().exists());

        let mut term = terminal("999\n");
        handle(&ctx, &mut store, &mut term).unwrap();
        assert!(output(term).ends_with("Appointment not found.\n"));

        assert_eq!(store.len(), 3);
        assert_eq!(fs::read_to_string(ctx.data_file()).unwrap(), THREE);
    }
}
