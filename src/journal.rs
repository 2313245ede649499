// 📜 Journal - append-only record of what happened in a session
//
// Each successful registry mutation leaves one Event behind. The journal
// lives in memory with the registry and is never written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PatientRegistered,
    DoctorRegistered,
    AppointmentBooked,
    AppointmentCompleted,
    DoctorRemoved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: EventType,
    pub entity_type: String,
    pub entity_id: String,
    pub data: serde_json::Value,
    pub actor: String,
}

impl Event {
    pub fn new(
        event_type: EventType,
        entity_type: &str,
        entity_id: &str,
        data: serde_json::Value,
        actor: &str,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type,
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            data,
            actor: actor.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Vec<Event>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events, oldest first
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events whose entity id matches, or whose data mentions the id
    /// (an appointment event names both its patient and doctor)
    pub fn for_entity(&self, entity_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| {
                e.entity_id == entity_id
                    || e.data.get("patient_id").and_then(|v| v.as_str()) == Some(entity_id)
                    || e.data.get("doctor_id").and_then(|v| v.as_str()) == Some(entity_id)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_creation() {
        let event = Event::new(
            EventType::PatientRegistered,
            "patient",
            "P1000",
            json!({ "name": "Sita" }),
            "system",
        );

        assert!(!event.event_id.is_empty());
        assert_eq!(event.entity_id, "P1000");
        assert_eq!(event.data["name"], "Sita");
    }

    #[test]
    fn test_for_entity_matches_references() {
        let mut journal = Journal::new();
        journal.record(Event::new(
            EventType::DoctorRegistered,
            "doctor",
            "D1000",
            json!({ "name": "Ram" }),
            "system",
        ));
        journal.record(Event::new(
            EventType::AppointmentBooked,
            "appointment",
            "7f0c3c1e-0000-4000-8000-000000000000",
            json!({ "patient_id": "P1000", "doctor_id": "D1000", "index": 0 }),
            "system",
        ));

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.for_entity("D1000").len(), 2);
        assert_eq!(journal.for_entity("P1000").len(), 1);
        assert!(journal.for_entity("P9999").is_empty());
    }

    #[test]
    fn test_event_type_serializes_snake_case() {
        let json = serde_json::to_string(&EventType::AppointmentCompleted).unwrap();
        assert_eq!(json, "\"appointment_completed\"");
    }
}
