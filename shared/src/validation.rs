//! Client-side form checks run before anything is sent to the backend.

use crate::adapter::{join_list, keyed, keyed_contacts, serialize_access, trim_contacts, Keyed};
use crate::error::{ApiError, ErrorCode};
use crate::i18n::{translate, Language};
use crate::models::{
    AccessPermission, AgeGroupDraft, ChildPayload, ChildProfile, ChildStatus, EmergencyContact,
    LoginRequest, NewIncident, NewInvoice, RegistrationRequest, UserType,
};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: ErrorCode,
}

impl FieldError {
    pub fn new(field: &'static str, code: ErrorCode) -> Self {
        Self { field, code }
    }

    pub fn message(&self, lang: Language) -> String {
        translate(lang, &self.code.message_key()).to_string()
    }
}

/// Message for the field, if it failed
pub fn error_for(errors: &[FieldError], field: &str) -> Option<ErrorCode> {
    errors.iter().find(|e| e.field == field).map(|e| e.code.clone())
}

/// Collapse field errors into one error for the notification banner.
/// Several missing fields read as "fill all required fields".
pub fn summarize(errors: &[FieldError]) -> Option<ApiError> {
    let required = errors
        .iter()
        .filter(|e| e.code == ErrorCode::RequiredField)
        .count();
    if required > 1 {
        return Some(ApiError::validation(ErrorCode::FillAllRequired));
    }
    errors.first().map(|e| ApiError::validation(e.code.clone()))
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, ErrorCode::RequiredField));
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn check_email(errors: &mut Vec<FieldError>, field: &'static str, email: &str) {
    if email.trim().is_empty() {
        errors.push(FieldError::new(field, ErrorCode::RequiredField));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(field, ErrorCode::InvalidEmail));
    }
}

fn check_new_password(errors: &mut Vec<FieldError>, field: &'static str, password: &str, confirm: &str) {
    if password.is_empty() {
        errors.push(FieldError::new(field, ErrorCode::RequiredField));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(field, ErrorCode::PasswordTooShort));
    }
    if password != confirm {
        errors.push(FieldError::new("confirm_password", ErrorCode::PasswordMismatch));
    }
}

pub fn validate_login(request: &LoginRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(&mut errors, "email", &request.email);
    require(&mut errors, "password", &request.password);
    errors
}

/// Checks a daycare or parent registration before submission
pub fn validate_registration(request: &RegistrationRequest, confirm_password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "first_name", &request.first_name);
    require(&mut errors, "last_name", &request.last_name);
    check_email(&mut errors, "email", &request.email);
    check_new_password(&mut errors, "password", &request.password, confirm_password);

    if request.user_type == UserType::Daycare {
        match &request.daycare_info {
            Some(daycare) => {
                require(&mut errors, "daycare.name", &daycare.name);
                require(&mut errors, "daycare.license_number", &daycare.license_number);
                require(&mut errors, "daycare.address", &daycare.address);
                require(&mut errors, "daycare.city", &daycare.city);
                require(&mut errors, "daycare.province", &daycare.province);
                require(&mut errors, "daycare.postal_code", &daycare.postal_code);
                if !daycare.email.trim().is_empty() && !is_valid_email(&daycare.email) {
                    errors.push(FieldError::new("daycare.email", ErrorCode::InvalidEmail));
                }
                if daycare.program_types.is_empty() {
                    errors.push(FieldError::new("daycare.program_types", ErrorCode::SelectProgramType));
                }
                if daycare.age_groups.is_empty() {
                    errors.push(FieldError::new("daycare.age_groups", ErrorCode::SelectAgeGroup));
                }
            }
            None => errors.push(FieldError::new("daycare", ErrorCode::FillAllRequired)),
        }
    }
    errors
}

pub fn validate_password_change(current: &str, new_password: &str, confirm: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "current_password", current);
    check_new_password(&mut errors, "new_password", new_password, confirm);
    errors
}

pub fn validate_incident(incident: &NewIncident) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if incident.child_id.is_none() {
        errors.push(FieldError::new("child_id", ErrorCode::RequiredField));
    }
    require(&mut errors, "incident_type", &incident.incident_type);
    require(&mut errors, "description", &incident.description);
    errors
}

pub fn validate_invoice(invoice: &NewInvoice) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if invoice.child_id.is_none() {
        errors.push(FieldError::new("child_id", ErrorCode::RequiredField));
    }
    if !(invoice.amount > 0.0) {
        errors.push(FieldError::new("amount", ErrorCode::ValidationError));
    }
    require(&mut errors, "due_date", &invoice.due_date);
    errors
}

pub fn validate_age_group(draft: &AgeGroupDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "name", &draft.name);
    if let (Some(min), Some(max)) = (draft.min_age_months, draft.max_age_months) {
        if min > max {
            errors.push(FieldError::new("max_age_months", ErrorCode::ValidationError));
        }
    }
    errors
}

/// Editing state of the child form
#[derive(Debug, Clone, PartialEq)]
pub struct ChildForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub age_group_id: Option<i64>,
    pub status: ChildStatus,
    pub contacts: Vec<Keyed<EmergencyContact>>,
    pub access: Vec<Keyed<AccessPermission>>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    pub assigned_staff_ids: Vec<i64>,
}

impl Default for ChildForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: String::new(),
            age_group_id: None,
            status: ChildStatus::Enrolled,
            contacts: keyed_contacts(&[]),
            access: Vec::new(),
            allergies: Vec::new(),
            medications: Vec::new(),
            conditions: Vec::new(),
            assigned_staff_ids: Vec::new(),
        }
    }
}

impl ChildForm {
    pub fn from_profile(child: &ChildProfile) -> Self {
        Self {
            first_name: child.first_name.clone(),
            last_name: child.last_name.clone(),
            date_of_birth: child.date_of_birth.clone().unwrap_or_default(),
            age_group_id: child.age_group_id,
            status: child.status.unwrap_or(ChildStatus::Enrolled),
            contacts: keyed_contacts(&child.emergency_contacts),
            access: keyed(&child.access_permissions),
            allergies: child.medical_info.allergy_names(),
            medications: child.medical_info.medication_names(),
            conditions: child.medical_info.condition_names(),
            assigned_staff_ids: child.assigned_staff_ids.clone(),
        }
    }
}

/// Validates the child form and builds the write payload.
///
/// An age group must be chosen explicitly; nothing is picked on the user's
/// behalf.
pub fn validate_child_form(form: &ChildForm) -> Result<ChildPayload, Vec<FieldError>> {
    let mut errors = Vec::new();
    require(&mut errors, "first_name", &form.first_name);
    require(&mut errors, "last_name", &form.last_name);
    require(&mut errors, "date_of_birth", &form.date_of_birth);
    if form.age_group_id.is_none() {
        errors.push(FieldError::new("age_group_id", ErrorCode::RequiredField));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let named_access: Vec<Keyed<AccessPermission>> = form
        .access
        .iter()
        .filter(|row| !row.record.name.trim().is_empty())
        .cloned()
        .collect();

    Ok(ChildPayload {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        date_of_birth: form.date_of_birth.trim().to_string(),
        age_group_id: form.age_group_id,
        status: form.status,
        emergency_contacts: trim_contacts(&form.contacts),
        access_permissions: serialize_access(&named_access),
        allergies: join_list(&form.allergies),
        emergency_medications: join_list(&form.medications),
        medical_conditions: join_list(&form.conditions),
        assigned_staff_ids: form.assigned_staff_ids.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllergyEntry, DaycareInfo, MedicalInfo};

    fn codes(errors: &[FieldError]) -> Vec<(&'static str, ErrorCode)> {
        errors.iter().map(|e| (e.field, e.code.clone())).collect()
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("parent@garderie.ca"));
        assert!(!is_valid_email("parent@garderie"));
        assert!(!is_valid_email("parent garderie@x.ca"));
        assert!(!is_valid_email("@x.ca"));
        assert!(!is_valid_email("a@b@c.ca"));
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = validate_login(&LoginRequest {
            email: "".to_string(),
            password: "".to_string(),
        });
        assert_eq!(
            codes(&errors),
            vec![("email", ErrorCode::RequiredField), ("password", ErrorCode::RequiredField)]
        );
        assert_eq!(
            summarize(&errors),
            Some(ApiError::validation(ErrorCode::FillAllRequired))
        );
    }

    #[test]
    fn test_parent_registration_password_rules() {
        let request = RegistrationRequest {
            user_type: UserType::Parent,
            first_name: "Léa".to_string(),
            last_name: "Roy".to_string(),
            email: "lea@example.ca".to_string(),
            password: "short".to_string(),
            ..RegistrationRequest::default()
        };
        let errors = validate_registration(&request, "different");
        assert_eq!(
            codes(&errors),
            vec![
                ("password", ErrorCode::PasswordTooShort),
                ("confirm_password", ErrorCode::PasswordMismatch)
            ]
        );
        assert_eq!(errors[0].message(Language::En), "Password must be at least 8 characters.");
    }

    #[test]
    fn test_daycare_registration_needs_programs_and_age_groups() {
        let request = RegistrationRequest {
            user_type: UserType::Daycare,
            first_name: "Anne".to_string(),
            last_name: "Gagnon".to_string(),
            email: "anne@example.ca".to_string(),
            password: "longenough".to_string(),
            daycare_info: Some(DaycareInfo {
                name: "Petits Pas".to_string(),
                license_number: "QC-123".to_string(),
                address: "1 rue Principale".to_string(),
                city: "Laval".to_string(),
                province: "QC".to_string(),
                postal_code: "H7A 1A1".to_string(),
                ..DaycareInfo::default()
            }),
            ..RegistrationRequest::default()
        };
        let errors = validate_registration(&request, "longenough");
        assert_eq!(
            codes(&errors),
            vec![
                ("daycare.program_types", ErrorCode::SelectProgramType),
                ("daycare.age_groups", ErrorCode::SelectAgeGroup)
            ]
        );
        assert_eq!(error_for(&errors, "daycare.age_groups"), Some(ErrorCode::SelectAgeGroup));
    }

    #[test]
    fn test_child_form_requires_age_group() {
        let form = ChildForm {
            first_name: "Emma".to_string(),
            last_name: "Tremblay".to_string(),
            date_of_birth: "2021-04-02".to_string(),
            ..ChildForm::default()
        };
        let errors = validate_child_form(&form).unwrap_err();
        assert_eq!(codes(&errors), vec![("age_group_id", ErrorCode::RequiredField)]);
    }

    #[test]
    fn test_child_form_builds_payload() {
        let mut form = ChildForm {
            first_name: " Emma ".to_string(),
            last_name: "Tremblay".to_string(),
            date_of_birth: "2021-04-02".to_string(),
            age_group_id: Some(3),
            allergies: vec!["Peanuts".to_string(), "Eggs".to_string()],
            ..ChildForm::default()
        };
        form.access.push(Keyed::new(AccessPermission {
            name: "Grand-maman".to_string(),
            ..AccessPermission::default()
        }));
        form.access.push(Keyed::new(AccessPermission::default()));

        let payload = validate_child_form(&form).unwrap();
        assert_eq!(payload.first_name, "Emma");
        assert_eq!(payload.allergies, "Peanuts, Eggs");
        assert_eq!(payload.emergency_medications, "");
        assert!(payload.emergency_contacts.is_empty());
        assert_eq!(payload.access_permissions.len(), 1);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["access_permissions"][0].get("id").is_none());
        assert!(json["access_permissions"][0].get("key").is_none());
    }

    #[test]
    fn test_form_from_profile() {
        let child = ChildProfile {
            first_name: "Noah".to_string(),
            medical_info: MedicalInfo {
                allergies: vec![AllergyEntry {
                    name: "Milk".to_string(),
                    ..AllergyEntry::default()
                }],
                ..MedicalInfo::default()
            },
            access_permissions: vec![AccessPermission {
                name: "Oncle Paul".to_string(),
                is_authorized: false,
                ..AccessPermission::default()
            }],
            ..ChildProfile::default()
        };
        let form = ChildForm::from_profile(&child);
        assert_eq!(form.allergies, vec!["Milk".to_string()]);
        assert_eq!(form.contacts.len(), 1);
        assert!(!form.access[0].record.is_authorized);
        assert_eq!(form.status, ChildStatus::Enrolled);
    }

    #[test]
    fn test_profile_access_rows_save_back_unchanged() {
        let permissions = vec![
            AccessPermission {
                name: "Oncle Paul".to_string(),
                phone: "418-555-0199".to_string(),
                relation: "Uncle".to_string(),
                is_authorized: true,
            },
            AccessPermission {
                name: "Voisine".to_string(),
                is_authorized: false,
                ..AccessPermission::default()
            },
        ];
        let child = ChildProfile {
            first_name: "Noah".to_string(),
            last_name: "Roy".to_string(),
            date_of_birth: Some("2022-01-10".to_string()),
            age_group_id: Some(2),
            access_permissions: permissions.clone(),
            ..ChildProfile::default()
        };
        let mut form = ChildForm::from_profile(&child);
        assert_ne!(form.access[0].key, form.access[1].key);
        form.access.push(Keyed::new(AccessPermission {
            name: "   ".to_string(),
            ..AccessPermission::default()
        }));

        let payload = validate_child_form(&form).unwrap();
        assert_eq!(payload.access_permissions, permissions);
    }

    #[test]
    fn test_incident_and_invoice_checks() {
        let errors = validate_incident(&NewIncident {
            incident_type: "injury".to_string(),
            ..NewIncident::default()
        });
        assert_eq!(
            codes(&errors),
            vec![("child_id", ErrorCode::RequiredField), ("description", ErrorCode::RequiredField)]
        );

        let errors = validate_invoice(&NewInvoice {
            child_id: Some(1),
            amount: 0.0,
            due_date: "2025-07-01".to_string(),
            description: String::new(),
            invoice_type: "monthly_fee".to_string(),
        });
        assert_eq!(codes(&errors), vec![("amount", ErrorCode::ValidationError)]);
    }

    #[test]
    fn test_age_group_bounds() {
        let draft = AgeGroupDraft {
            name: "Toddlers".to_string(),
            min_age_months: Some(36),
            max_age_months: Some(18),
            ..AgeGroupDraft::default()
        };
        assert_eq!(codes(&validate_age_group(&draft)), vec![("max_age_months", ErrorCode::ValidationError)]);
    }

    #[test]
    fn test_password_change() {
        assert!(validate_password_change("old-secret", "new-secret", "new-secret").is_empty());
        let errors = validate_password_change("", "new-secret", "new-secret");
        assert_eq!(codes(&errors), vec![("current_password", ErrorCode::RequiredField)]);
    }
}
