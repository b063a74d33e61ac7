// crates/register-core/src/store.rs - In-memory appointment store and its flat-file format
//
// FILE FORMAT (one field per line):
//
//   <count>
//   <patient_no>
//   <name>
//   <reason>
//   <date> <time>
//   <patient_no>
//   ...
//
// `save` writes exactly what `load` reads back. Values that would shift the
// line layout (line breaks in name/reason, whitespace in date/time) are refused
// at save time instead of being written ambiguously.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::Lines;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::appointment::{Appointment, NewAppointment};

/// Errors that can occur while reading, writing or mutating the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed appointment file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Duplicate patient number {0} in appointment file")]
    DuplicatePatientNo(u32),

    #[error("Cannot store {field} of patient {patient_no}: {value:?} would break the file layout")]
    UnencodableField {
        patient_no: u32,
        field: &'static str,
        value: String,
    },

    #[error("No patient numbers left to assign")]
    PatientNoExhausted,

    #[error("Failed to write appointment file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of appointments for one invocation
///
/// Order is insertion order. Patient numbers are unique; every constructor and
/// mutator keeps it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, rejecting duplicate patient numbers
    pub fn from_appointments(appointments: Vec<Appointment>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(appointments.len());
        for appointment in &appointments {
            if !seen.insert(appointment.patient_no) {
                return Err(StoreError::DuplicatePatientNo(appointment.patient_no));
            }
        }
        Ok(Self { appointments })
    }

    /// Load the store from disk
    ///
    /// A missing or unreadable file means "no appointments yet" and yields an
    /// empty store. A file that can be read but does not follow the layout is
    /// an error, so it is never silently replaced by the next save.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no appointment file yet, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "appointment file is unreadable, starting empty");
                return Ok(Self::new());
            }
        };

        let store = Self::parse(&content)?;
        debug!(path = %path.display(), count = store.len(), "loaded appointments");
        Ok(store)
    }

    /// Replace the file at `path` with the current contents
    ///
    /// The data goes to a temporary file in the same directory first, which is
    /// then renamed over `path`. A write that fails part way leaves the old
    /// file untouched.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let content = self.render()?;
        let write_error = |source: io::Error| StoreError::Write {
            path: path.display().to_string(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
        staged.write_all(content.as_bytes()).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged.persist(path).map_err(|e| write_error(e.error))?;

        debug!(path = %path.display(), count = self.len(), "saved appointments");
        Ok(())
    }

    /// Parse the flat-file representation
    ///
    /// Empty or whitespace-only input is an empty store. Lines after the last
    /// counted record are ignored.
    pub fn parse(content: &str) -> StoreResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut reader = LineReader::new(content);
        let header = reader.next_line("record count")?;
        let count: usize = header.trim().parse().map_err(|_| {
            reader.malformed(format!("expected record count, found {:?}", header))
        })?;

        let mut appointments = Vec::new();
        for _ in 0..count {
            let number_line = reader.next_line("patient number")?;
            let patient_no = number_line
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    reader.malformed(format!(
                        "expected a positive patient number, found {:?}",
                        number_line
                    ))
                })?;

            let name = reader.next_line("name")?.to_string();
            let reason = reader.next_line("reason")?.to_string();

            let schedule_line = reader.next_line("date and time")?;
            let mut tokens = schedule_line.split_whitespace();
            let (Some(date), Some(time), None) = (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(reader.malformed(format!(
                    "expected \"DD/MM/YYYY HH:MM\", found {:?}",
                    schedule_line
                )));
            };

            appointments.push(Appointment {
                patient_no,
                name,
                reason,
                date: date.to_string(),
                time: time.to_string(),
            });
        }

        Self::from_appointments(appointments)
    }

    /// Produce the flat-file representation
    pub fn render(&self) -> StoreResult<String> {
        let mut out = format!("{}\n", self.appointments.len());

        for appointment in &self.appointments {
            ensure_single_line(appointment, "name", &appointment.name)?;
            ensure_single_line(appointment, "reason", &appointment.reason)?;
            ensure_token(appointment, "date", &appointment.date)?;
            ensure_token(appointment, "time", &appointment.time)?;

            out.push_str(&format!(
                "{}\n{}\n{}\n{} {}\n",
                appointment.patient_no,
                appointment.name,
                appointment.reason,
                appointment.date,
                appointment.time
            ));
        }

        Ok(out)
    }

    /// Patient number the next added appointment will receive
    ///
    /// One past the highest number in use, or 1 for an empty store. Numbers
    /// are only ever appended in increasing order, so this is also one past
    /// the last record's number.
    pub fn next_patient_no(&self) -> StoreResult<u32> {
        match self.appointments.iter().map(|a| a.patient_no).max() {
            None => Ok(1),
            Some(highest) => highest.checked_add(1).ok_or(StoreError::PatientNoExhausted),
        }
    }

    /// Number and append a new appointment, returning its patient number
    pub fn add(&mut self, draft: NewAppointment) -> StoreResult<u32> {
        let patient_no = self.next_patient_no()?;
        self.appointments.push(draft.numbered(patient_no));
        Ok(patient_no)
    }

    /// Remove the appointment with the given patient number, if any
    pub fn remove(&mut self, patient_no: u32) -> Option<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.patient_no == patient_no)?;
        Some(self.appointments.remove(index))
    }

    /// First appointment with the given patient number
    pub fn find(&self, patient_no: u32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.patient_no == patient_no)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn as_slice(&self) -> &[Appointment] {
        &self.appointments
    }
}

impl<'a> IntoIterator for &'a AppointmentStore {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Line cursor that remembers its 1-based position for error messages
struct LineReader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> StoreResult<&'a str> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line),
            None => Err(self.malformed(format!("unexpected end of file, expected {}", expected))),
        }
    }

    fn malformed(&self, reason: String) -> StoreError {
        StoreError::Malformed {
            line: self.line,
            reason,
        }
    }
}

fn ensure_single_line(
    appointment: &Appointment,
    field: &'static str,
    value: &str,
) -> StoreResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(unencodable(appointment, field, value));
    }
    Ok(())
}

fn ensure_token(appointment: &Appointment, field: &'static str, value: &str) -> StoreResult<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(unencodable(appointment, field, value));
    }
    Ok(())
}

fn unencodable(appointment: &Appointment, field: &'static str, value: &str) -> StoreError {
    StoreError::UnencodableField {
        patient_no: appointment.patient_no,
        field,
        value: value.to_string(),
    }
}
