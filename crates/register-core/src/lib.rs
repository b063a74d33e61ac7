// crates/register-core/src/lib.rs - Core library for the patient appointment register
//
// MODULES:
// - validate: pure checks for names, dates, times and patient numbers
// - appointment: the record types
// - store: ordered in-memory store plus the flat-file format
// - config: where the data lives and how loud logging is
//
// Nothing in here talks to a terminal. Prompting and printing live in the CLI
// crate, which lends the store to each operation.

pub mod appointment;
pub mod config;
pub mod store;
pub mod validate;

pub use appointment::{Appointment, NewAppointment};
pub use config::{ConfigError, ConfigResult, RegisterConfig};
pub use store::{AppointmentStore, StoreError, StoreResult};
