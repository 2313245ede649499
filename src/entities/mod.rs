// Participant Models
//
// Every participant has:
// - An id assigned by whoever creates it (the registry for doctors/patients)
// - A validated display name
// - A role used for profile display

pub mod user;
pub mod doctor;
pub mod patient;
pub mod admin;

pub use user::{Participant, PersonName, Role, ValidationError};
pub use doctor::{Doctor, SharedDoctor};
pub use patient::{Patient, SharedPatient};
pub use admin::{Admin, DoctorRemoval};
