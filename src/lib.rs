// Medical Appointment System - Core Library
// Exposes the registry, entities and console front-end for the binary and tests

pub mod entities;
pub mod appointment;
pub mod registry;
pub mod journal;
pub mod export;
pub mod config;
pub mod menu;

// Re-export commonly used types
pub use entities::{
    Admin, Doctor, DoctorRemoval, Participant, Patient, PersonName, Role,
    SharedDoctor, SharedPatient, ValidationError,
};
pub use appointment::{Appointment, AppointmentError, AppointmentStatus};
pub use registry::{AppointmentSystem, Listing, RegistrySummary, FIRST_ID};
pub use journal::{Event, EventType, Journal};
pub use export::{render_lines, AppointmentLog, ExportError, DEFAULT_LOG_FILE};
pub use config::{Args, Config};
pub use menu::Console;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
