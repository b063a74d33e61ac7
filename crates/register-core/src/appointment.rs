// crates/register-core/src/appointment.rs - Appointment records

use std::fmt;

/// One patient's appointment as stored in the register
///
/// Date and time are kept as the exact strings the user typed (`DD/MM/YYYY`
/// and `HH:MM`), which is also how they are written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Unique, positive identifier assigned by the store
    pub patient_no: u32,
    pub name: String,
    /// Free text, single line, may be empty
    pub reason: String,
    pub date: String,
    pub time: String,
}

/// An appointment collected from the user that has not been numbered yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub reason: String,
    pub date: String,
    pub time: String,
}

impl NewAppointment {
    /// Attach a patient number, producing a storable record
    pub fn numbered(self, patient_no: u32) -> Appointment {
        Appointment {
            patient_no,
            name: self.name,
            reason: self.reason,
            date: self.date,
            time: self.time,
        }
    }
}

/// Human-readable listing, one labelled field per line
impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patient No: {}", self.patient_no)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Reason: {}", self.reason)?;
        writeln!(f, "Date: {}", self.date)?;
        write!(f, "Time: {}", self.time)
    }
}
