// 📅 Appointment - one patient, one doctor, one lifecycle
//
// Scheduled --complete()--> Completed
//
// Completed is terminal. The appointment holds the same doctor/patient
// handles as the registry, so completing it frees the doctor everywhere.

use crate::entities::{Participant, SharedDoctor, SharedPatient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error("No doctor is available right now.")]
    NoDoctorAvailable,

    #[error("Invalid appointment index.")]
    InvalidIndex { index: usize, len: usize },

    /// Raised by front-ends that accept signed input before it reaches the
    /// registry's `usize` index.
    #[error("Invalid appointment index.")]
    NegativeIndex(i64),

    #[error("Appointment already completed.")]
    AlreadyCompleted,
}

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// APPOINTMENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct Appointment {
    /// Correlation id for the journal and log output. Lookups still go by
    /// position in the registry's appointment list.
    id: Uuid,
    patient: SharedPatient,
    doctor: SharedDoctor,
    status: AppointmentStatus,
    booked_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Bind a patient to a doctor. Availability is the registry's concern.
    pub fn new(patient: SharedPatient, doctor: SharedDoctor) -> Self {
        Appointment {
            id: Uuid::new_v4(),
            patient,
            doctor,
            status: AppointmentStatus::Scheduled,
            booked_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark completed and make the doctor available again
    pub fn complete(&mut self) -> Result<(), AppointmentError> {
        if self.status == AppointmentStatus::Completed {
            return Err(AppointmentError::AlreadyCompleted);
        }

        self.status = AppointmentStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.doctor.borrow_mut().set_available(true);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }

    pub fn patient(&self) -> &SharedPatient {
        &self.patient
    }

    pub fn doctor(&self) -> &SharedDoctor {
        &self.doctor
    }

    pub fn patient_id(&self) -> String {
        self.patient.id().to_string()
    }

    pub fn doctor_id(&self) -> String {
        self.doctor.borrow().id().to_string()
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// `Appointment: Patient[<name>] - Doctor[<name>] - Status: <status>`
    pub fn details(&self) -> String {
        format!(
            "Appointment: Patient[{}] - Doctor[{}] - Status: {}",
            self.patient.name(),
            self.doctor.borrow().name(),
            self.status
        )
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Doctor, Patient};

    fn booked() -> (Appointment, SharedDoctor) {
        let doctor = Doctor::new("D1000", "DrSushir").unwrap().into_shared();
        doctor.borrow_mut().set_available(false);
        let patient = Patient::new("P1000", "Ram").unwrap().into_shared();

        (Appointment::new(patient, std::rc::Rc::clone(&doctor)), doctor)
    }

    #[test]
    fn test_new_appointment_is_scheduled() {
        let (appointment, _) = booked();

        assert_eq!(appointment.status(), AppointmentStatus::Scheduled);
        assert_eq!(appointment.status().as_str(), "Scheduled");
        assert!(appointment.completed_at().is_none());
        assert_eq!(appointment.patient_id(), "P1000");
        assert_eq!(appointment.doctor_id(), "D1000");
    }

    #[test]
    fn test_complete_frees_doctor() {
        let (mut appointment, doctor) = booked();

        appointment.complete().unwrap();

        assert_eq!(appointment.status(), AppointmentStatus::Completed);
        assert!(doctor.borrow().is_available());
    }

    #[test]
    fn test_completion_time_follows_booking_time() {
        let (mut appointment, _) = booked();
        let booked_at = appointment.booked_at();

        appointment.complete().unwrap();

        let completed_at = appointment.completed_at().unwrap();
        assert!(booked_at <= completed_at);
        assert_eq!(appointment.booked_at(), booked_at);
    }

    #[test]
    fn test_complete_twice_fails() {
        let (mut appointment, _) = booked();

        appointment.complete().unwrap();
        let second = appointment.complete();

        assert_eq!(second, Err(AppointmentError::AlreadyCompleted));
        assert!(appointment.is_completed());
    }

    #[test]
    fn test_details_format() {
        let (mut appointment, _) = booked();

        assert_eq!(
            appointment.details(),
            "Appointment: Patient[Ram] - Doctor[DrSushir] - Status: Scheduled"
        );

        appointment.complete().unwrap();
        assert_eq!(
            appointment.to_string(),
            "Appointment: Patient[Ram] - Doctor[DrSushir] - Status: Completed"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppointmentError::InvalidIndex { index: 5, len: 0 }.to_string(),
            "Invalid appointment index."
        );
        assert_eq!(
            AppointmentError::NegativeIndex(-1).to_string(),
            "Invalid appointment index."
        );
        assert_eq!(
            AppointmentError::AlreadyCompleted.to_string(),
            "Appointment already completed."
        );
    }

    #[test]
    fn test_status_serializes_as_name() {
        let json = serde_json::to_string(&AppointmentStatus::Completed).unwrap();
        assert_eq!(json, "\"Completed\"");
    }
}
