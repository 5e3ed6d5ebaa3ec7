use serde::{Deserialize, Serialize};
use std::fmt;

use super::incident::Incident;

/// Enrollment status of a child at a daycare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildStatus {
    Enrolled,
    Waitlist,
    Withdrawn,
    Graduated,
}

impl ChildStatus {
    pub const ALL: [ChildStatus; 4] = [
        ChildStatus::Enrolled,
        ChildStatus::Waitlist,
        ChildStatus::Withdrawn,
        ChildStatus::Graduated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChildStatus::Enrolled => "enrolled",
            ChildStatus::Waitlist => "waitlist",
            ChildStatus::Withdrawn => "withdrawn",
            ChildStatus::Graduated => "graduated",
        }
    }

    /// Lenient parse used by the adapter; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "enrolled" | "active" => Some(ChildStatus::Enrolled),
            "waitlist" | "waitlisted" => Some(ChildStatus::Waitlist),
            "withdrawn" => Some(ChildStatus::Withdrawn),
            "graduated" => Some(ChildStatus::Graduated),
            _ => None,
        }
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical severity shared by allergies and conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    LifeThreatening,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::LifeThreatening => "life_threatening",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "life_threatening" | "life-threatening" | "severe" => Some(Severity::LifeThreatening),
            _ => None,
        }
    }

    /// CSS class used for the severity badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Mild => "badge badge-mild",
            Severity::Moderate => "badge badge-moderate",
            Severity::LifeThreatening => "badge badge-danger",
        }
    }
}

/// A parent or guardian linked to a child
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parent {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(alias = "relationship_type")]
    pub relation: String,
    pub is_primary: bool,
    #[serde(alias = "can_pickup")]
    pub can_pick_up: bool,
}

impl Parent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Emergency contact as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl EmergencyContact {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.phone.trim().is_empty() && self.relation.trim().is_empty()
    }
}

/// A person authorized (or explicitly not) to pick the child up.
///
/// This is the record written back to the backend; it carries no UI key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPermission {
    pub name: String,
    pub phone: String,
    pub relation: String,
    pub is_authorized: bool,
}

impl Default for AccessPermission {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            relation: String::new(),
            is_authorized: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllergyEntry {
    pub name: String,
    /// Legacy data carries no severity; the profile shows no badge then
    pub severity: Option<Severity>,
    pub reaction: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub name: String,
    pub severity: Option<Severity>,
    pub description: String,
}

/// Canonical medical block; every list is always present
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MedicalInfo {
    pub allergies: Vec<AllergyEntry>,
    pub medications: Vec<MedicationEntry>,
    pub conditions: Vec<ConditionEntry>,
}

impl MedicalInfo {
    pub fn allergy_names(&self) -> Vec<String> {
        self.allergies.iter().map(|a| a.name.clone()).collect()
    }

    pub fn medication_names(&self) -> Vec<String> {
        self.medications.iter().map(|m| m.name.clone()).collect()
    }

    pub fn condition_names(&self) -> Vec<String> {
        self.conditions.iter().map(|c| c.name.clone()).collect()
    }
}

/// Canonical child view model produced by `adapter::normalize_child`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<String>,
    pub age: Option<String>,
    pub age_group: String,
    pub age_group_id: Option<i64>,
    pub status: Option<ChildStatus>,
    pub enrollment_date: Option<String>,
    pub notes: Option<String>,
    pub parents: Vec<Parent>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub access_permissions: Vec<AccessPermission>,
    pub medical_info: MedicalInfo,
    pub recent_incidents: Vec<Incident>,
    pub assigned_staff_ids: Vec<i64>,
}

impl ChildProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Upper-cased initials for the avatar bubble
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Case-insensitive match against first name, last name or full name
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.full_name().to_lowercase().contains(&term)
    }
}

/// Body of `POST /api/daycare/children` and `PUT /api/daycare/children/:id`.
///
/// Medical lists go back in the legacy comma-joined form the backend accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPayload {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub age_group_id: Option<i64>,
    pub status: ChildStatus,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub access_permissions: Vec<AccessPermission>,
    pub allergies: String,
    pub emergency_medications: String,
    pub medical_conditions: String,
    pub assigned_staff_ids: Vec<i64>,
}

/// Filter applied to the children list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildFilter {
    #[default]
    All,
    Present,
    Enrolled,
    Waitlist,
}

impl ChildFilter {
    /// Query string appended to the children endpoint
    pub fn query(&self) -> &'static str {
        match self {
            ChildFilter::All => "",
            ChildFilter::Present => "?present=true",
            ChildFilter::Enrolled => "?status=enrolled",
            ChildFilter::Waitlist => "?status=waitlist",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_lenient() {
        assert_eq!(ChildStatus::parse("Enrolled"), Some(ChildStatus::Enrolled));
        assert_eq!(ChildStatus::parse("waitlisted"), Some(ChildStatus::Waitlist));
        assert_eq!(ChildStatus::parse("expelled"), None);
    }

    #[test]
    fn test_severity_parse_and_serialize() {
        assert_eq!(Severity::parse("life_threatening"), Some(Severity::LifeThreatening));
        assert_eq!(Severity::parse("Moderate"), Some(Severity::Moderate));
        assert_eq!(Severity::parse(""), None);
        assert_eq!(
            serde_json::to_string(&Severity::LifeThreatening).unwrap(),
            "\"life_threatening\""
        );
    }

    #[test]
    fn test_initials_and_search() {
        let child = ChildProfile {
            first_name: "emma".to_string(),
            last_name: "Tremblay".to_string(),
            ..ChildProfile::default()
        };
        assert_eq!(child.initials(), "ET");
        assert!(child.matches_search("emma t"));
        assert!(child.matches_search("  "));
        assert!(!child.matches_search("noah"));
    }

    #[test]
    fn test_blank_contact_detection() {
        assert!(EmergencyContact::default().is_blank());
        let contact = EmergencyContact {
            phone: "555-0101".to_string(),
            ..EmergencyContact::default()
        };
        assert!(!contact.is_blank());
    }

    #[test]
    fn test_filter_query() {
        assert_eq!(ChildFilter::All.query(), "");
        assert_eq!(ChildFilter::Waitlist.query(), "?status=waitlist");
    }
}
