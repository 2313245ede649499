// 🩺 Doctor Entity - identity + availability flag
//
// Availability mirrors the doctor's single active appointment: booking
// clears it, completing the appointment sets it again. Only the registry
// and Appointment::complete flip it during normal operation.

use super::user::{Participant, PersonName, Role, ValidationError};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Doctor handle shared by the registry roster and every appointment that
/// references the doctor.
pub type SharedDoctor = Rc<RefCell<Doctor>>;

#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    id: String,
    name: PersonName,
    available: bool,
}

impl Doctor {
    /// New doctor, available by default
    pub fn new(id: impl Into<String>, name: &str) -> Result<Self, ValidationError> {
        Ok(Doctor {
            id: id.into(),
            name: PersonName::parse(name)?,
            available: true,
        })
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn into_shared(self) -> SharedDoctor {
        Rc::new(RefCell::new(self))
    }
}

impl Participant for Doctor {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        Role::Doctor
    }

    fn profile(&self) -> String {
        format!(
            "Doctor ID: {}, Name: {}, Available: {}",
            self.id, self.name, self.available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_creation() {
        let doctor = Doctor::new("D1001", "DrSushir").unwrap();

        assert_eq!(doctor.id(), "D1001");
        assert_eq!(doctor.name(), "DrSushir");
        assert_eq!(doctor.role(), Role::Doctor);
        assert!(doctor.is_available());
    }

    #[test]
    fn test_availability_toggle() {
        let mut doctor = Doctor::new("D1001", "DrSushir").unwrap();

        doctor.set_available(false);
        assert!(!doctor.is_available());

        doctor.set_available(true);
        assert!(doctor.is_available());
    }

    #[test]
    fn test_profile_reports_availability() {
        let mut doctor = Doctor::new("D2002", "Sita").unwrap();
        assert_eq!(doctor.profile(), "Doctor ID: D2002, Name: Sita, Available: true");

        doctor.set_available(false);
        assert_eq!(doctor.profile(), "Doctor ID: D2002, Name: Sita, Available: false");
    }

    #[test]
    fn test_invalid_name_fails() {
        assert!(Doctor::new("D1002", "Dr123").is_err());
    }

    #[test]
    fn test_shared_handle_sees_mutation() {
        let shared = Doctor::new("D1000", "Ram").unwrap().into_shared();
        let other = Rc::clone(&shared);

        other.borrow_mut().set_available(false);
        assert!(!shared.borrow().is_available());
    }
}
