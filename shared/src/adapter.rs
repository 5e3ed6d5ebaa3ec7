//! Response-shape adapter.
//!
//! The backend has returned children, allergies, access permissions and
//! contacts in several shapes over time (flat comma-joined strings, arrays of
//! strings, arrays of `{name}` objects, relational link records). Everything
//! the REST client reads passes through here so views only ever see the
//! canonical types in [`crate::models`].
//!
//! None of these functions fail: a shape that is not recognized degrades to an
//! empty list or string and is reported at debug level.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{
    AccessPermission, AllergyEntry, ChildProfile, ChildStatus, ConditionEntry, EmergencyContact,
    Incident, Invoice, MedicalInfo, MedicationEntry, Parent, ParentDashboard, Severity,
};

static NULL: Value = Value::Null;

/// A record paired with a UI-only list key.
///
/// The key lives beside the record, not inside it, so serializing the record
/// for a write request can never leak it.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: Uuid,
    pub record: T,
}

impl<T> Keyed<T> {
    pub fn new(record: T) -> Self {
        Self {
            key: Uuid::new_v4(),
            record,
        }
    }
}

/// Wrap every record with a fresh key
pub fn keyed<T: Clone>(records: &[T]) -> Vec<Keyed<T>> {
    records.iter().cloned().map(Keyed::new).collect()
}

/// Drop the UI keys, keeping source order
pub fn strip_keys<T: Clone>(rows: &[Keyed<T>]) -> Vec<T> {
    rows.iter().map(|row| row.record.clone()).collect()
}

// ---------------------------------------------------------------------------
// String lists and labels
// ---------------------------------------------------------------------------

fn split_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn split_item(item: &Value) -> Vec<String> {
    match item {
        Value::String(text) => split_csv(text),
        Value::Object(obj) => obj
            .get("name")
            .and_then(Value::as_str)
            .map(split_csv)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Flatten a string, an array of strings, an array of `{name}` objects or a
/// single object into a list of trimmed names. Duplicates are kept.
pub fn normalize_string_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().flat_map(split_item).collect(),
        other => split_item(other),
    }
}

/// Display label of an age group that may be a bare string or `{id, name}`
pub fn label_of(raw: &Value) -> String {
    match raw {
        Value::String(label) => label.clone(),
        Value::Object(obj) => obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Join a list back into the legacy comma-separated form
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Checkbox toggle: remove when present, append otherwise
pub fn toggle_item(items: &[String], item: &str) -> Vec<String> {
    if items.iter().any(|existing| existing == item) {
        items.iter().filter(|existing| *existing != item).cloned().collect()
    } else {
        let mut next = items.to_vec();
        next.push(item.to_string());
        next
    }
}

// ---------------------------------------------------------------------------
// Lenient field access
// ---------------------------------------------------------------------------

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(text_of))
}

fn int_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}

/// Decode one record, treating `null` fields as absent so `#[serde(default)]`
/// fills them. Records that still do not fit are skipped.
pub fn decode_lenient<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    match serde_json::from_value(without_nulls(raw)) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("adapter: skipping unrecognized record: {}", e);
            None
        }
    }
}

/// Items of a list payload that is either a bare array or `{ <key>: [...] }`
pub fn list_items<'a>(raw: &'a Value, key: &str) -> &'a [Value] {
    match raw {
        Value::Array(items) => items,
        Value::Object(obj) => obj
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// Decode every recognizable record of a list payload
pub fn decode_list<T: DeserializeOwned>(raw: &Value, key: &str) -> Vec<T> {
    list_items(raw, key).iter().filter_map(decode_lenient).collect()
}

// ---------------------------------------------------------------------------
// Access permissions and contacts
// ---------------------------------------------------------------------------

fn access_record(item: &Value) -> Option<AccessPermission> {
    match item {
        Value::Object(obj) => Some(AccessPermission {
            name: first_text(obj, &["name"]).unwrap_or_default(),
            phone: first_text(obj, &["phone"]).unwrap_or_default(),
            relation: first_text(obj, &["relation"]).unwrap_or_default(),
            is_authorized: obj
                .get("is_authorized")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        }),
        Value::String(name) => Some(AccessPermission {
            name: name.trim().to_string(),
            ..AccessPermission::default()
        }),
        other => {
            log::debug!("adapter: ignoring access permission {}", other);
            None
        }
    }
}

/// Canonical access-permission records without UI keys
pub fn parse_access_list(raw: &Value) -> Vec<AccessPermission> {
    raw.as_array()
        .map(|items| items.iter().filter_map(access_record).collect())
        .unwrap_or_default()
}

/// Access-permission rows ready for an editable list
pub fn normalize_access_list(raw: &Value) -> Vec<Keyed<AccessPermission>> {
    parse_access_list(raw).into_iter().map(Keyed::new).collect()
}

/// Records to send back; the UI keys are dropped
pub fn serialize_access(rows: &[Keyed<AccessPermission>]) -> Vec<AccessPermission> {
    strip_keys(rows)
}

pub fn normalize_emergency_contacts(raw: &Value) -> Vec<EmergencyContact> {
    raw.as_array()
        .map(|items| items.iter().filter_map(decode_lenient).collect())
        .unwrap_or_default()
}

/// Editable contact rows; an empty list still yields one blank row
pub fn keyed_contacts(contacts: &[EmergencyContact]) -> Vec<Keyed<EmergencyContact>> {
    if contacts.is_empty() {
        vec![Keyed::new(EmergencyContact::default())]
    } else {
        keyed(contacts)
    }
}

/// Contacts to send back: blank rows dropped, UI keys stripped
pub fn trim_contacts(rows: &[Keyed<EmergencyContact>]) -> Vec<EmergencyContact> {
    rows.iter()
        .filter(|row| !row.record.is_blank())
        .map(|row| row.record.clone())
        .collect()
}

/// `parents` array, else a single `parent` object, else nothing
pub fn normalize_parents(child: &Map<String, Value>) -> Vec<Parent> {
    match (child.get("parents"), child.get("parent")) {
        (Some(Value::Array(items)), _) => items.iter().filter_map(decode_lenient).collect(),
        (_, Some(parent @ Value::Object(_))) => decode_lenient(parent).into_iter().collect(),
        _ => Vec::new(),
    }
}

pub fn normalize_incidents(raw: &Value) -> Vec<Incident> {
    raw.as_array()
        .map(|items| items.iter().filter_map(decode_lenient).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Medical data
// ---------------------------------------------------------------------------

/// Which representation a medical list arrived in
#[derive(Debug, Clone, PartialEq)]
pub enum MedicalShape<'a> {
    /// Link records such as `{allergy: {id, name}, severity}`
    Relational(&'a [Value]),
    /// `medical_info.<list>` array of `{name, severity, ...}` or strings
    Nested(&'a [Value]),
    /// Flat comma-joined string or array of strings; carries no severity
    Legacy(Vec<String>),
    Absent,
}

struct ShapeKeys {
    relational: &'static str,
    link: &'static str,
    nested: &'static str,
    legacy: &'static [&'static str],
}

const ALLERGY_KEYS: ShapeKeys = ShapeKeys {
    relational: "child_allergies",
    link: "allergy",
    nested: "allergies",
    legacy: &["allergies_csv", "allergies"],
};

const MEDICATION_KEYS: ShapeKeys = ShapeKeys {
    relational: "child_medications",
    link: "medication",
    nested: "medications",
    legacy: &["emergency_medications", "medications"],
};

const CONDITION_KEYS: ShapeKeys = ShapeKeys {
    relational: "child_conditions",
    link: "condition",
    nested: "conditions",
    legacy: &["medical_conditions", "conditions"],
};

fn is_link_list(items: &[Value], link: &str) -> bool {
    items
        .iter()
        .any(|item| item.as_object().is_some_and(|obj| obj.contains_key(link)))
}

/// Objects carrying more than a name, e.g. `{name, severity}` or `{name, dosage}`
fn has_details(items: &[Value]) -> bool {
    items.iter().any(|item| {
        item.as_object()
            .is_some_and(|obj| obj.keys().any(|key| key != "name" && key != "id"))
    })
}

fn classify<'a>(child: &'a Map<String, Value>, keys: &ShapeKeys) -> MedicalShape<'a> {
    // A relational list is authoritative when present, even if empty
    if let Some(Value::Array(items)) = child.get(keys.relational) {
        return MedicalShape::Relational(items);
    }
    for key in keys.legacy {
        if let Some(Value::Array(items)) = child.get(*key) {
            if is_link_list(items, keys.link) {
                return MedicalShape::Relational(items);
            }
        }
    }
    let nested = child
        .get("medical_info")
        .and_then(|info| info.get(keys.nested))
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty());
    if let Some(items) = nested {
        return MedicalShape::Nested(items);
    }
    for key in keys.legacy {
        if let Some(Value::Array(items)) = child.get(*key) {
            if has_details(items) {
                return MedicalShape::Nested(items);
            }
        }
    }
    for key in keys.legacy {
        if let Some(value) = child.get(*key) {
            let names = normalize_string_list(value);
            if !names.is_empty() {
                return MedicalShape::Legacy(names);
            }
        }
    }
    MedicalShape::Absent
}

/// Name, severity and the record itself (for extra fields) of one entry
struct RawEntry<'a> {
    name: String,
    severity: Option<Severity>,
    fields: Option<&'a Map<String, Value>>,
}

fn link_entry<'a>(item: &'a Value, link: &str) -> Option<RawEntry<'a>> {
    match item {
        Value::Object(obj) => {
            let name = match obj.get(link) {
                Some(Value::Object(linked)) => first_text(linked, &["name"]),
                Some(other) => text_of(other),
                None => None,
            }
            .or_else(|| first_text(obj, &["name"]))?;
            Some(RawEntry {
                name,
                severity: obj.get("severity").and_then(Value::as_str).and_then(Severity::parse),
                fields: Some(obj),
            })
        }
        Value::String(name) if !name.trim().is_empty() => Some(RawEntry {
            name: name.trim().to_string(),
            severity: None,
            fields: None,
        }),
        _ => None,
    }
}

fn resolve_entries<'a>(shape: &MedicalShape<'a>, link: &str) -> Vec<RawEntry<'a>> {
    match shape {
        MedicalShape::Relational(items) | MedicalShape::Nested(items) => {
            let items: &'a [Value] = items;
            items.iter().filter_map(|item| link_entry(item, link)).collect()
        }
        MedicalShape::Legacy(names) => names
            .iter()
            .map(|name| RawEntry {
                name: name.clone(),
                severity: None,
                fields: None,
            })
            .collect(),
        MedicalShape::Absent => Vec::new(),
    }
}

fn extra(entry: &RawEntry<'_>, keys: &[&str]) -> String {
    entry
        .fields
        .and_then(|fields| first_text(fields, keys))
        .unwrap_or_default()
}

/// Resolve allergies, medications and conditions into the canonical block
pub fn normalize_medical_info(child: &Map<String, Value>) -> MedicalInfo {
    let allergies = resolve_entries(&classify(child, &ALLERGY_KEYS), ALLERGY_KEYS.link)
        .iter()
        .map(|entry| AllergyEntry {
            name: entry.name.clone(),
            severity: entry.severity,
            reaction: extra(entry, &["reaction", "description"]),
        })
        .collect();

    let medications = resolve_entries(&classify(child, &MEDICATION_KEYS), MEDICATION_KEYS.link)
        .iter()
        .map(|entry| MedicationEntry {
            name: entry.name.clone(),
            dosage: extra(entry, &["dosage"]),
            purpose: extra(entry, &["purpose"]),
        })
        .collect();

    let conditions = resolve_entries(&classify(child, &CONDITION_KEYS), CONDITION_KEYS.link)
        .iter()
        .map(|entry| ConditionEntry {
            name: entry.name.clone(),
            severity: entry.severity,
            description: extra(entry, &["description"]),
        })
        .collect();

    MedicalInfo {
        allergies,
        medications,
        conditions,
    }
}

// ---------------------------------------------------------------------------
// Child records
// ---------------------------------------------------------------------------

/// Merge a `{child: {...}, ...}` detail envelope into one flat object.
/// Top-level fields win unless they are null.
fn flatten_envelope(top: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = match top.get("child") {
        Some(Value::Object(inner)) => inner.clone(),
        _ => Map::new(),
    };
    for (key, value) in top {
        if key == "child" && value.is_object() {
            continue;
        }
        if value.is_null() && merged.get(key).is_some_and(|v| !v.is_null()) {
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn age_group_id(child: &Map<String, Value>) -> Option<i64> {
    child
        .get("age_group")
        .and_then(|group| group.get("id"))
        .and_then(int_of)
        .or_else(|| child.get("age_group_id").and_then(int_of))
}

fn staff_ids(raw: Option<&Value>) -> Vec<i64> {
    raw.and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(int_of).collect())
        .unwrap_or_default()
}

/// Normalize any known child payload into the canonical profile
pub fn normalize_child(raw: &Value) -> ChildProfile {
    let Some(top) = raw.as_object() else {
        log::debug!("adapter: child payload is not an object");
        return ChildProfile::default();
    };
    let child = flatten_envelope(top);
    let access_raw = match child.get("access_permissions") {
        Some(value) if !value.is_null() => value,
        _ => child.get("pickup_authorization").unwrap_or(&NULL),
    };

    ChildProfile {
        id: child.get("id").and_then(int_of),
        first_name: first_text(&child, &["first_name", "firstName"]).unwrap_or_default(),
        last_name: first_text(&child, &["last_name", "lastName"]).unwrap_or_default(),
        date_of_birth: first_text(&child, &["date_of_birth", "dateOfBirth"]),
        age: first_text(&child, &["age_display", "age"]),
        age_group: child.get("age_group").map(label_of).unwrap_or_default(),
        age_group_id: age_group_id(&child),
        status: first_text(&child, &["status", "currentStatus"])
            .as_deref()
            .and_then(ChildStatus::parse),
        enrollment_date: first_text(&child, &["enrollment_date"]),
        notes: first_text(&child, &["notes"]),
        parents: normalize_parents(&child),
        emergency_contacts: child
            .get("emergency_contacts")
            .map(normalize_emergency_contacts)
            .unwrap_or_default(),
        access_permissions: parse_access_list(access_raw),
        medical_info: normalize_medical_info(&child),
        recent_incidents: child
            .get("recent_incidents")
            .map(normalize_incidents)
            .unwrap_or_default(),
        assigned_staff_ids: staff_ids(child.get("assigned_staff_ids")),
    }
}

/// Children list payload (bare array or `{children: [...]}`)
pub fn normalize_children(raw: &Value) -> Vec<ChildProfile> {
    list_items(raw, "children").iter().map(normalize_child).collect()
}

fn section<'a>(raw: &'a Value, keys: &[&str]) -> &'a Value {
    keys.iter()
        .find_map(|key| raw.get(*key).filter(|v| v.is_array()))
        .unwrap_or(&NULL)
}

pub fn normalize_parent_dashboard(raw: &Value) -> ParentDashboard {
    ParentDashboard {
        children: normalize_children(section(raw, &["children"])),
        recent_incidents: normalize_incidents(section(raw, &["recent_incidents", "incidents"])),
        pending_invoices: decode_list::<Invoice>(
            section(raw, &["pending_invoices", "invoices"]),
            "invoices",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_splits_comma_joined_string() {
        assert_eq!(normalize_string_list(&json!("Peanuts, Eggs")), vec!["Peanuts", "Eggs"]);
    }

    #[test]
    fn test_string_list_splits_inside_named_objects() {
        assert_eq!(normalize_string_list(&json!([{"name": "Milk, Soy"}])), vec!["Milk", "Soy"]);
    }

    #[test]
    fn test_string_list_missing_is_empty() {
        assert!(normalize_string_list(&Value::Null).is_empty());
        assert!(normalize_string_list(&json!(42)).is_empty());
        assert!(normalize_string_list(&json!([true, null])).is_empty());
    }

    #[test]
    fn test_string_list_keeps_order_and_duplicates() {
        let list = normalize_string_list(&json!(["Milk", " ,Eggs,, ", {"name": "Milk"}, "Soy"]));
        assert_eq!(list, vec!["Milk", "Eggs", "Milk", "Soy"]);
    }

    #[test]
    fn test_string_list_single_object() {
        assert_eq!(normalize_string_list(&json!({"id": 1, "name": "Asthma"})), vec!["Asthma"]);
    }

    #[test]
    fn test_access_list_defaults_and_strip() {
        let rows = normalize_access_list(&json!([{"name": "Jo"}]));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].record.is_authorized);
        assert_eq!(rows[0].record.phone, "");
        assert!(!rows[0].key.is_nil());

        let sent = serde_json::to_value(serialize_access(&rows)).unwrap();
        assert_eq!(
            sent,
            json!([{"name": "Jo", "phone": "", "relation": "", "is_authorized": true}])
        );
        assert!(sent[0].get("id").is_none());
    }

    #[test]
    fn test_access_list_keeps_explicit_false_and_ignores_backend_ids() {
        let rows = normalize_access_list(&json!([
            {"id": 7, "name": "Sam", "phone": "555-0199", "relation": "uncle", "is_authorized": false},
            {"name": "Kim", "is_authorized": null}
        ]));
        assert!(!rows[0].record.is_authorized);
        assert!(rows[1].record.is_authorized);
        assert_ne!(rows[0].key, rows[1].key);
        let sent = serde_json::to_value(serialize_access(&rows)).unwrap();
        assert!(sent[0].get("id").is_none());
    }

    #[test]
    fn test_access_list_non_array_is_empty() {
        assert!(normalize_access_list(&Value::Null).is_empty());
        assert!(normalize_access_list(&json!({"name": "Jo"})).is_empty());
    }

    #[test]
    fn test_label_of() {
        assert_eq!(label_of(&json!({"id": 3, "name": "Toddler"})), "Toddler");
        assert_eq!(label_of(&json!("Toddler")), "Toddler");
        assert_eq!(label_of(&Value::Null), "");
        assert_eq!(label_of(&json!(false)), "");
    }

    #[test]
    fn test_legacy_allergies_have_no_severity() {
        let profile = normalize_child(&json!({
            "id": 1,
            "first_name": "Emma",
            "allergies_csv": "Peanuts, Eggs"
        }));
        let allergies = &profile.medical_info.allergies;
        assert_eq!(allergies.len(), 2);
        assert_eq!(allergies[0].name, "Peanuts");
        assert_eq!(allergies[1].name, "Eggs");
        assert!(allergies.iter().all(|a| a.severity.is_none()));
    }

    #[test]
    fn test_relational_allergies_take_precedence() {
        let profile = normalize_child(&json!({
            "child_allergies": [
                {"allergy": {"id": 2, "name": "Shellfish"}, "severity": "life_threatening", "reaction": "Anaphylaxis"}
            ],
            "allergies_csv": "Peanuts, Eggs"
        }));
        let allergies = &profile.medical_info.allergies;
        assert_eq!(allergies.len(), 1);
        assert_eq!(allergies[0].name, "Shellfish");
        assert_eq!(allergies[0].severity, Some(Severity::LifeThreatening));
        assert_eq!(allergies[0].reaction, "Anaphylaxis");
    }

    #[test]
    fn test_link_records_under_legacy_key_are_relational() {
        let profile = normalize_child(&json!({
            "allergies": [{"allergy": {"id": 1, "name": "Milk"}, "severity": "mild"}]
        }));
        assert_eq!(profile.medical_info.allergies[0].name, "Milk");
        assert_eq!(profile.medical_info.allergies[0].severity, Some(Severity::Mild));
    }

    #[test]
    fn test_detailed_records_under_legacy_key_keep_severity() {
        let profile = normalize_child(&json!({
            "allergies": [{"name": "Kiwi", "severity": "moderate", "reaction": "Hives"}],
            "medications": [{"name": "Benadryl", "dosage": "5ml"}],
            "conditions": [{"name": "Asthma, Eczema"}]
        }));
        let info = &profile.medical_info;
        assert_eq!(info.allergies.len(), 1);
        assert_eq!(info.allergies[0].name, "Kiwi");
        assert_eq!(info.allergies[0].severity, Some(Severity::Moderate));
        assert_eq!(info.allergies[0].reaction, "Hives");
        assert_eq!(info.medications[0].dosage, "5ml");
        assert_eq!(info.condition_names(), vec!["Asthma", "Eczema"]);
    }

    #[test]
    fn test_nested_medical_info_beats_legacy_fields() {
        let profile = normalize_child(&json!({
            "medical_info": {
                "medications": [{"name": "EpiPen Jr", "dosage": "0.15mg", "purpose": "Anaphylaxis"}],
                "conditions": []
            },
            "emergency_medications": "Tylenol",
            "medical_conditions": "Asthma, Eczema"
        }));
        let info = &profile.medical_info;
        assert_eq!(info.medications.len(), 1);
        assert_eq!(info.medications[0].dosage, "0.15mg");
        assert_eq!(info.condition_names(), vec!["Asthma", "Eczema"]);
        assert!(info.allergies.is_empty());
    }

    #[test]
    fn test_child_collections_are_always_present() {
        let profile = normalize_child(&json!({"id": "12", "parents": null, "recent_incidents": {}}));
        assert_eq!(profile.id, Some(12));
        assert!(profile.parents.is_empty());
        assert!(profile.emergency_contacts.is_empty());
        assert!(profile.recent_incidents.is_empty());
        assert!(profile.medical_info.conditions.is_empty());

        assert_eq!(normalize_child(&json!("garbage")), ChildProfile::default());
    }

    #[test]
    fn test_detail_envelope_is_flattened() {
        let profile = normalize_child(&json!({
            "child": {"id": 5, "firstName": "Noah", "lastName": "Roy", "status": "waitlist"},
            "id": null,
            "age_group": {"id": 2, "name": "Preschool"},
            "parent": {"first_name": "Julie", "last_name": "Roy", "email": null, "can_pickup": true, "relationship_type": "mother"}
        }));
        assert_eq!(profile.id, Some(5));
        assert_eq!(profile.full_name(), "Noah Roy");
        assert_eq!(profile.status, Some(ChildStatus::Waitlist));
        assert_eq!(profile.age_group, "Preschool");
        assert_eq!(profile.age_group_id, Some(2));
        assert_eq!(profile.parents.len(), 1);
        assert_eq!(profile.parents[0].email, "");
        assert_eq!(profile.parents[0].relation, "mother");
        assert!(profile.parents[0].can_pick_up);
    }

    #[test]
    fn test_pickup_authorization_fallback() {
        let profile = normalize_child(&json!({
            "access_permissions": null,
            "pickup_authorization": [{"name": "Grandma"}]
        }));
        assert_eq!(profile.access_permissions.len(), 1);
        assert_eq!(profile.access_permissions[0].name, "Grandma");
    }

    #[test]
    fn test_contacts_round_trip_through_form_rows() {
        let rows = keyed_contacts(&[]);
        assert_eq!(rows.len(), 1);
        assert!(trim_contacts(&rows).is_empty());

        let contacts = normalize_emergency_contacts(&json!([
            {"id": 3, "name": "Aunt May", "phone": "555-0100", "relation": null}
        ]));
        let rows = keyed_contacts(&contacts);
        let sent = trim_contacts(&rows);
        assert_eq!(sent[0].name, "Aunt May");
        assert_eq!(sent[0].relation, "");
    }

    #[test]
    fn test_list_items_accepts_envelope() {
        let wrapped = json!({"success": true, "children": [{"id": 1}, {"id": 2}]});
        assert_eq!(normalize_children(&wrapped).len(), 2);
        assert_eq!(normalize_children(&json!([{"id": 1}])).len(), 1);
        assert!(normalize_children(&json!({"error": "nope"})).is_empty());
    }

    #[test]
    fn test_toggle_item_never_duplicates() {
        let selected = vec!["Milk".to_string()];
        let added = toggle_item(&selected, "Eggs");
        assert_eq!(added, vec!["Milk", "Eggs"]);
        assert_eq!(toggle_item(&added, "Milk"), vec!["Eggs"]);
        assert_eq!(join_list(&added), "Milk, Eggs");
    }

    #[test]
    fn test_parent_dashboard_sections() {
        let dashboard = normalize_parent_dashboard(&json!({
            "children": [{"id": 1, "first_name": "Léa"}],
            "incidents": [{"id": 9, "title": "Scraped knee", "status": "open"}],
            "pending_invoices": [{"id": 4, "invoice_number": "INV-4", "balance": 120.5, "status": "overdue"}]
        }));
        assert_eq!(dashboard.children[0].first_name, "Léa");
        assert_eq!(dashboard.recent_incidents[0].heading(), "Scraped knee");
        assert_eq!(dashboard.pending_invoices[0].balance, 120.5);
    }
}
