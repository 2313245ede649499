// 🛡️ Admin - roster maintenance
//
// Removing a doctor only affects the roster. Appointments already booked
// keep their own handle to the doctor, so history stays readable and the
// removed doctor simply stops being offered for new bookings.

use super::doctor::SharedDoctor;
use super::user::{Participant, PersonName, Role, ValidationError};
use serde::Serialize;
use std::fmt;
use tracing::info;

// ============================================================================
// REMOVAL OUTCOME
// ============================================================================

/// Result of a removal request. None of these are errors: every variant
/// other than `Removed` leaves the roster untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorRemoval {
    Removed(String),
    EmptyRoster,
    NotFound(String),
    MissingId,
}

impl DoctorRemoval {
    pub fn message(&self) -> &'static str {
        match self {
            DoctorRemoval::Removed(_) => "Doctor removed.",
            DoctorRemoval::EmptyRoster => "No doctor in the list",
            DoctorRemoval::NotFound(_) => "Doctor ID not found.",
            DoctorRemoval::MissingId => "No doctor ID supplied.",
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DoctorRemoval::Removed(_))
    }
}

impl fmt::Display for DoctorRemoval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// ADMIN ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admin {
    id: String,
    name: PersonName,
}

impl Admin {
    pub fn new(id: impl Into<String>, name: &str) -> Result<Self, ValidationError> {
        Ok(Admin {
            id: id.into(),
            name: PersonName::parse(name)?,
        })
    }

    /// Remove the first doctor whose id equals `doctor_id`
    pub fn remove_doctor(
        &self,
        doctors: &mut Vec<SharedDoctor>,
        doctor_id: Option<&str>,
    ) -> DoctorRemoval {
        let Some(doctor_id) = doctor_id else {
            return DoctorRemoval::MissingId;
        };

        if doctors.is_empty() {
            return DoctorRemoval::EmptyRoster;
        }

        match doctors.iter().position(|d| d.borrow().id() == doctor_id) {
            Some(position) => {
                doctors.remove(position);
                info!(admin = %self.id, doctor_id, "doctor removed from roster");
                DoctorRemoval::Removed(doctor_id.to_string())
            }
            None => DoctorRemoval::NotFound(doctor_id.to_string()),
        }
    }
}

impl Participant for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        Role::Admin
    }
}
