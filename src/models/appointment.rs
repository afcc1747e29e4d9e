use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Represents the category a visit is booked under. Requests address a
/// kind by its index into [`VisitKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitKind {
    /// First visit with this practice
    NewPatient,
    /// Return visit for an existing condition
    FollowUp,
}

impl VisitKind {
    pub const ALL: [VisitKind; 2] = [VisitKind::NewPatient, VisitKind::FollowUp];

    pub fn from_index(index: usize) -> Option<VisitKind> {
        Self::ALL.get(index).copied()
    }

    /// Gets the display name of the kind
    pub fn label(&self) -> &'static str {
        match self {
            VisitKind::NewPatient => "New Patient",
            VisitKind::FollowUp => "Follow-up",
        }
    }
}

impl Serialize for VisitKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A booked appointment. `time` is stored in UTC; offset timestamps
/// are normalized on the way in.
#[derive(Debug, Serialize, Clone)]
pub struct Appointment {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub time: DateTime<Utc>,
    pub kind: VisitKind,
    pub doctor: u32,
}

/// Body of a create request. `time` is an ISO-8601 timestamp string
/// and `kind` an index into [`VisitKind::ALL`]; both are validated
/// before anything is stored.
#[derive(Debug, Deserialize)]
pub struct NewAppointment {
    pub first_name: String,
    pub last_name: String,
    pub time: String,
    pub kind: usize,
}

/// Body of an update request. Absent fields leave the stored value
/// untouched.
#[derive(Debug, Deserialize)]
pub struct AppointmentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time: Option<String>,
    pub kind: Option<usize>,
}

/// Validated form of [`AppointmentPatch`], ready to merge into a
/// stored appointment.
#[derive(Debug)]
pub struct AppointmentUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub kind: Option<VisitKind>,
}
