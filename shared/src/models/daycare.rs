use serde::{Deserialize, Serialize};

use super::billing::Invoice;
use super::child::ChildProfile;
use super::incident::Incident;

/// Age group configured by a daycare (standard or custom)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGroup {
    pub id: i64,
    pub name: String,
    pub min_age_months: Option<u32>,
    pub max_age_months: Option<u32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl AgeGroup {
    /// "12-24 months" style range, empty when the bounds are unknown
    pub fn range_label(&self) -> String {
        match (self.min_age_months, self.max_age_months) {
            (Some(min), Some(max)) => format!("{}-{} months", min, max),
            (Some(min), None) => format!("{}+ months", min),
            (None, Some(max)) => format!("up to {} months", max),
            (None, None) => String::new(),
        }
    }
}

/// Body of `POST/PUT /api/daycare/age-groups`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeGroupDraft {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    pub min_age_months: Option<u32>,
    pub max_age_months: Option<u32>,
    pub description: String,
}

impl From<&AgeGroup> for AgeGroupDraft {
    fn from(group: &AgeGroup) -> Self {
        Self {
            id: Some(group.id),
            name: group.name.clone(),
            min_age_months: group.min_age_months,
            max_age_months: group.max_age_months,
            description: group.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Staff {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Counters from `/api/daycare/children/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaycareStats {
    pub enrolled_children: u32,
    pub waitlisted: u32,
    pub present_today: Option<u32>,
    pub open_incidents: Option<u32>,
    pub outstanding_balance: Option<f64>,
}

/// Row of the system-admin daycare table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaycareSummary {
    pub id: i64,
    pub name: String,
    pub license_number: String,
    pub city: String,
    pub province: String,
    pub status: String,
    pub children_count: Option<u32>,
}

/// Canonical parent dashboard produced by `adapter::normalize_parent_dashboard`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentDashboard {
    pub children: Vec<ChildProfile>,
    pub recent_incidents: Vec<Incident>,
    pub pending_invoices: Vec<Invoice>,
}

/// Invitation metadata from `/api/public/invitation/:token`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitation {
    pub valid: bool,
    pub message: Option<String>,
    pub email: Option<String>,
    pub daycare_name: Option<String>,
    pub child_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_range_label() {
        let group = AgeGroup {
            id: 1,
            name: "Toddler".to_string(),
            min_age_months: Some(18),
            max_age_months: Some(36),
            ..AgeGroup::default()
        };
        assert_eq!(group.range_label(), "18-36 months");
        assert_eq!(AgeGroup::default().range_label(), "");
    }

    #[test]
    fn test_draft_never_serializes_id() {
        let draft = AgeGroupDraft {
            id: Some(9),
            name: "Infant".to_string(),
            ..AgeGroupDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Infant");
    }

    #[test]
    fn test_stats_tolerate_missing_counters() {
        let stats: DaycareStats = serde_json::from_str(r#"{"enrolled_children": 12}"#).unwrap();
        assert_eq!(stats.enrolled_children, 12);
        assert_eq!(stats.waitlisted, 0);
        assert_eq!(stats.present_today, None);
    }
}
