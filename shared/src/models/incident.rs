use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    #[default]
    Open,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
            IncidentStatus::Unknown => "unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "badge badge-danger",
            IncidentStatus::Resolved => "badge badge-success",
            IncidentStatus::Closed | IncidentStatus::Unknown => "badge badge-muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSeverity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl IncidentSeverity {
    pub const CHOICES: [IncidentSeverity; 4] = [
        IncidentSeverity::Low,
        IncidentSeverity::Medium,
        IncidentSeverity::High,
        IncidentSeverity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentSeverity::Low => "low",
            IncidentSeverity::Medium => "medium",
            IncidentSeverity::High => "high",
            IncidentSeverity::Critical => "critical",
            IncidentSeverity::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "low" => IncidentSeverity::Low,
            "medium" => IncidentSeverity::Medium,
            "high" => IncidentSeverity::High,
            "critical" => IncidentSeverity::Critical,
            _ => IncidentSeverity::Unknown,
        }
    }
}

/// Incident record as rendered in lists and on the child profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub id: Option<i64>,
    pub child_id: Option<i64>,
    pub child_name: Option<String>,
    pub incident_type: String,
    pub severity: IncidentSeverity,
    pub title: String,
    pub description: String,
    pub location: String,
    pub incident_date: Option<String>,
    pub immediate_action_taken: String,
    pub parent_notified: bool,
    pub status: IncidentStatus,
}

impl Incident {
    /// Heading shown in lists; older records have no title
    pub fn heading(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.incident_type
        } else {
            &self.title
        }
    }
}

/// Body of `POST /api/daycare/incidents`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewIncident {
    pub child_id: Option<i64>,
    pub incident_type: String,
    pub description: String,
    pub severity: IncidentSeverity,
    pub location: String,
    pub witnesses: String,
    pub immediate_action: String,
    pub parent_notified: bool,
}

/// Body of `PUT /api/daycare/incidents/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentStatusUpdate {
    pub status: IncidentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_does_not_fail_decoding() {
        let incident: Incident =
            serde_json::from_str(r#"{"id": 4, "status": "escalated", "severity": "high"}"#).unwrap();
        assert_eq!(incident.status, IncidentStatus::Unknown);
        assert_eq!(incident.severity, IncidentSeverity::High);
    }

    #[test]
    fn test_heading_falls_back_to_type() {
        let incident = Incident {
            incident_type: "injury".to_string(),
            ..Incident::default()
        };
        assert_eq!(incident.heading(), "injury");
    }
}
