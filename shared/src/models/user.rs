use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Admin,
    Daycare,
    Parent,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Authenticated user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub preferred_language: Option<String>,
    pub daycare_id: Option<i64>,
}

impl User {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of login/register; login calls the token `access_token`,
/// registration calls it `token`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(alias = "token")]
    pub access_token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateResponse {
    pub user: Option<User>,
}

/// Daycare block of a daycare registration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaycareInfo {
    pub name: String,
    pub license_number: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub capacity: Option<u32>,
    pub description: String,
    pub program_types: Vec<String>,
    pub age_groups: Vec<String>,
}

/// Parent block of a parent registration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParentInfo {
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relation: String,
}

/// Body of `POST /api/auth/register` and `/api/auth/register-with-invitation`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daycare_info: Option<DaycareInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_info: Option<ParentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_plan_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub preferred_language: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Canadian provinces and territories offered in address forms
pub const PROVINCES: [(&str, &str); 13] = [
    ("AB", "Alberta"),
    ("BC", "British Columbia"),
    ("MB", "Manitoba"),
    ("NB", "New Brunswick"),
    ("NL", "Newfoundland and Labrador"),
    ("NS", "Nova Scotia"),
    ("ON", "Ontario"),
    ("PE", "Prince Edward Island"),
    ("QC", "Quebec"),
    ("SK", "Saskatchewan"),
    ("NT", "Northwest Territories"),
    ("NU", "Nunavut"),
    ("YT", "Yukon"),
];

/// Licensed program types a daycare can declare
pub const PROGRAM_TYPES: [&str; 5] = [
    "daycare",
    "family_day_homes",
    "out_of_school_care",
    "preschool",
    "group_family_child_care",
];

/// Government age brackets a daycare can serve
pub const SERVED_AGE_GROUPS: [&str; 3] = [
    "under_19_months",
    "19_months_to_kindergarten",
    "kindergarten_to_grade_6",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_accepts_both_token_names() {
        let login: AuthResponse =
            serde_json::from_str(r#"{"success": true, "access_token": "abc", "user": {"email": "a@b.ca", "user_type": "parent"}}"#)
                .unwrap();
        assert_eq!(login.access_token.as_deref(), Some("abc"));
        assert_eq!(login.user.unwrap().user_type, UserType::Parent);

        let register: AuthResponse = serde_json::from_str(r#"{"success": true, "token": "xyz"}"#).unwrap();
        assert_eq!(register.access_token.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_unknown_user_type() {
        let user: User = serde_json::from_str(r#"{"user_type": "staff"}"#).unwrap();
        assert_eq!(user.user_type, UserType::Unknown);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            email: "owner@garderie.ca".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "owner@garderie.ca");
    }

    #[test]
    fn test_registration_omits_absent_blocks() {
        let request = RegistrationRequest {
            user_type: UserType::Parent,
            email: "p@x.ca".to_string(),
            ..RegistrationRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_type"], "parent");
        assert!(json.get("daycare_info").is_none());
        assert!(json.get("invitation_token").is_none());
    }
}
