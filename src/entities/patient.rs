// 🧑 Patient Entity

use super::user::{Participant, PersonName, Role, ValidationError};
use serde::Serialize;
use std::rc::Rc;

/// Patients never change after registration, so a plain Rc is enough.
pub type SharedPatient = Rc<Patient>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: String,
    name: PersonName,
}

impl Patient {
    pub fn new(id: impl Into<String>, name: &str) -> Result<Self, ValidationError> {
        Ok(Patient {
            id: id.into(),
            name: PersonName::parse(name)?,
        })
    }

    pub fn into_shared(self) -> SharedPatient {
        Rc::new(self)
    }
}

impl Participant for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        Role::Patient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_creation() {
        let patient = Patient::new("P1001", "Ram").unwrap();

        assert_eq!(patient.id(), "P1001");
        assert_eq!(patient.name(), "Ram");
        assert_eq!(patient.role(), Role::Patient);
    }

    #[test]
    fn test_patient_profile() {
        let patient = Patient::new("P1001", "  Ram  ").unwrap();
        assert_eq!(patient.profile(), "Patient ID: P1001, Name: Ram");
    }

    #[test]
    fn test_invalid_patient_name() {
        assert!(Patient::new("P1002", "123Ram").is_err());
        assert!(Patient::new("P1002", "").is_err());
    }
}
