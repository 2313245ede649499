// 🏥 Appointment System - registry + first-fit scheduler
//
// Owns the patient roster, the doctor roster, the appointment list and two
// independent id counters. Appointments are addressed by their position in
// the list; nothing is ever removed from it, so positions are stable for the
// whole session.
//
// Booking policy is first-fit: the earliest-registered doctor that is
// currently available gets the appointment.

use crate::appointment::{Appointment, AppointmentError, AppointmentStatus};
use crate::config::Config;
use crate::entities::{
    Admin, Doctor, DoctorRemoval, Participant, Patient, SharedDoctor, SharedPatient,
    ValidationError,
};
use crate::export::{AppointmentLog, ExportError};
use crate::journal::{Event, EventType, Journal};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::rc::Rc;
use tracing::{info, warn};

/// First value handed out by both id counters
pub const FIRST_ID: u32 = 1000;

const SYSTEM_ACTOR: &str = "system";

// ============================================================================
// LISTING
// ============================================================================

/// Output of a read-only listing: either the formatted lines, or the
/// message explaining why there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Entries(Vec<String>),
    Empty(String),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty(_))
    }

    pub fn lines(&self) -> Vec<&str> {
        match self {
            Listing::Entries(lines) => lines.iter().map(String::as_str).collect(),
            Listing::Empty(message) => vec![message.as_str()],
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub patients: usize,
    pub doctors: usize,
    pub available_doctors: usize,
    pub scheduled_appointments: usize,
    pub completed_appointments: usize,
}

// ============================================================================
// APPOINTMENT SYSTEM
// ============================================================================

#[derive(Debug)]
pub struct AppointmentSystem {
    patients: Vec<SharedPatient>,
    doctors: Vec<SharedDoctor>,
    appointments: Vec<Appointment>,
    patient_counter: u32,
    doctor_counter: u32,
    log: AppointmentLog,
    journal: Journal,
}

impl AppointmentSystem {
    /// Empty registry writing its export log to `log`
    pub fn new(log: AppointmentLog) -> Self {
        AppointmentSystem {
            patients: Vec::new(),
            doctors: Vec::new(),
            appointments: Vec::new(),
            patient_counter: FIRST_ID,
            doctor_counter: FIRST_ID,
            log,
            journal: Journal::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(AppointmentLog::new(config.log_file.clone()))
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Register a patient and return its id ("P1000", "P1001", ...).
    ///
    /// The id is taken from the counter before the name is checked, so a
    /// rejected name still uses up a number and later ids skip it.
    pub fn register_patient(&mut self, name: &str) -> Result<String, ValidationError> {
        let id = format!("P{}", next_id(&mut self.patient_counter));

        let patient = Patient::new(id.clone(), name).inspect_err(|_| {
            warn!(patient_id = %id, "patient registration rejected: invalid name");
        })?;

        self.journal.record(Event::new(
            EventType::PatientRegistered,
            "patient",
            &id,
            json!({ "name": patient.name() }),
            SYSTEM_ACTOR,
        ));
        info!(patient_id = %id, "patient registered");

        self.patients.push(patient.into_shared());
        Ok(id)
    }

    /// Register a doctor and return its id ("D1000", "D1001", ...).
    /// Same counter behaviour as [`register_patient`](Self::register_patient).
    pub fn register_doctor(&mut self, name: &str) -> Result<String, ValidationError> {
        let id = format!("D{}", next_id(&mut self.doctor_counter));

        let doctor = Doctor::new(id.clone(), name).inspect_err(|_| {
            warn!(doctor_id = %id, "doctor registration rejected: invalid name");
        })?;

        self.journal.record(Event::new(
            EventType::DoctorRegistered,
            "doctor",
            &id,
            json!({ "name": doctor.name() }),
            SYSTEM_ACTOR,
        ));
        info!(doctor_id = %id, "doctor registered");

        self.doctors.push(doctor.into_shared());
        Ok(id)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Book `patient` with the first available doctor in registration order.
    ///
    /// Fails with `NoDoctorAvailable` without touching any state when every
    /// doctor is busy or the roster is empty.
    pub fn book_appointment(
        &mut self,
        patient: &SharedPatient,
    ) -> Result<&Appointment, AppointmentError> {
        let doctor = self
            .doctors
            .iter()
            .find(|d| d.borrow().is_available())
            .cloned()
            .ok_or(AppointmentError::NoDoctorAvailable)?;

        doctor.borrow_mut().set_available(false);
        let appointment = Appointment::new(Rc::clone(patient), doctor);
        let index = self.appointments.len();

        self.journal.record(Event::new(
            EventType::AppointmentBooked,
            "appointment",
            &appointment.id().to_string(),
            json!({
                "index": index,
                "patient_id": appointment.patient_id(),
                "doctor_id": appointment.doctor_id(),
            }),
            SYSTEM_ACTOR,
        ));
        info!(
            index,
            appointment_id = %appointment.id(),
            patient_id = %appointment.patient_id(),
            doctor_id = %appointment.doctor_id(),
            "appointment booked"
        );

        self.appointments.push(appointment);
        Ok(&self.appointments[index])
    }

    /// Complete the appointment at `index`, freeing its doctor
    pub fn complete_appointment(&mut self, index: usize) -> Result<(), AppointmentError> {
        let len = self.appointments.len();
        let appointment = self
            .appointments
            .get_mut(index)
            .ok_or(AppointmentError::InvalidIndex { index, len })?;

        appointment.complete()?;

        self.journal.record(Event::new(
            EventType::AppointmentCompleted,
            "appointment",
            &appointment.id().to_string(),
            json!({
                "index": index,
                "patient_id": appointment.patient_id(),
                "doctor_id": appointment.doctor_id(),
            }),
            SYSTEM_ACTOR,
        ));
        info!(index, appointment_id = %appointment.id(), "appointment completed");
        Ok(())
    }

    /// Remove a doctor from the roster on behalf of `admin`.
    ///
    /// Existing appointments keep their reference to the removed doctor:
    /// their details still print the doctor's name and completing them
    /// still works. The doctor counter is not rewound.
    pub fn remove_doctor(&mut self, admin: &Admin, doctor_id: Option<&str>) -> DoctorRemoval {
        let outcome = admin.remove_doctor(&mut self.doctors, doctor_id);

        if let DoctorRemoval::Removed(id) = &outcome {
            self.journal.record(Event::new(
                EventType::DoctorRemoved,
                "doctor",
                id,
                json!({}),
                admin.id(),
            ));
        }
        outcome
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn find_patient_by_id(&self, id: &str) -> Option<SharedPatient> {
        self.patients.iter().find(|p| p.id() == id).cloned()
    }

    pub fn find_doctor_by_id(&self, id: &str) -> Option<SharedDoctor> {
        self.doctors.iter().find(|d| d.borrow().id() == id).cloned()
    }

    pub fn patients(&self) -> &[SharedPatient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[SharedDoctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointment(&self, index: usize) -> Option<&Appointment> {
        self.appointments.get(index)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn log(&self) -> &AppointmentLog {
        &self.log
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    pub fn show_all_doctors(&self) -> Listing {
        if self.doctors.is_empty() {
            return Listing::Empty("No registered doctors".to_string());
        }

        let mut lines = vec![".....All Doctors.....".to_string()];
        lines.extend(self.doctors.iter().map(|d| d.borrow().profile()));
        Listing::Entries(lines)
    }

    pub fn show_all_appointments(&self) -> Listing {
        if self.appointments.is_empty() {
            return Listing::Empty("No appointments booked".to_string());
        }

        Listing::Entries(
            self.appointments
                .iter()
                .enumerate()
                .map(|(i, a)| format!("{}: {}", i, a.details()))
                .collect(),
        )
    }

    pub fn show_appointments_by_doctor_id(&self, doctor_id: &str) -> Listing {
        self.indexed_listing(
            |a| a.doctor().borrow().id() == doctor_id,
            format!("No appointments found for Doctor ID: {}", doctor_id),
        )
    }

    pub fn show_appointments_by_patient_id(&self, patient_id: &str) -> Listing {
        self.indexed_listing(
            |a| a.patient().id() == patient_id,
            format!("No appointments found for Patient ID: {}", patient_id),
        )
    }

    /// Scan the whole list, then decide whether anything matched
    fn indexed_listing<F>(&self, matches: F, none_found: String) -> Listing
    where
        F: Fn(&Appointment) -> bool,
    {
        let lines: Vec<String> = self
            .appointments
            .iter()
            .enumerate()
            .filter(|(_, a)| matches(a))
            .map(|(i, a)| format!("Appointment Index: {}: {}", i, a.details()))
            .collect();

        if lines.is_empty() {
            Listing::Empty(none_found)
        } else {
            Listing::Entries(lines)
        }
    }

    pub fn summary(&self) -> RegistrySummary {
        let completed = self
            .appointments
            .iter()
            .filter(|a| a.status() == AppointmentStatus::Completed)
            .count();

        RegistrySummary {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
            available_doctors: self
                .doctors
                .iter()
                .filter(|d| d.borrow().is_available())
                .count(),
            scheduled_appointments: self.appointments.len() - completed,
            completed_appointments: completed,
        }
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Append every appointment to the configured log file.
    /// A failure leaves the in-memory registry exactly as it was.
    pub fn save_appointments_to_file(&self) -> Result<usize, ExportError> {
        self.log.append(&self.appointments).inspect_err(|e| {
            warn!(error = %e, "saving appointments failed");
        })
    }

    pub fn clear_all_contents_of_the_file(&self) -> Result<(), ExportError> {
        self.log.clear().inspect_err(|e| {
            warn!(error = %e, "clearing appointment log failed");
        })
    }
}

impl Default for AppointmentSystem {
    fn default() -> Self {
        Self::new(AppointmentLog::default())
    }
}

/// Post-increment: hand out the current value, then advance
fn next_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

// ============================================================================
// TESTS
// ============================================================================
