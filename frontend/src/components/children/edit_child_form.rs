use shared::adapter::{toggle_item, Keyed};
use shared::validation::{error_for, summarize, validate_child_form, ChildForm, FieldError};
use shared::{translate, AccessPermission, AgeGroup, ApiError, ChildProfile, ChildStatus, EmergencyContact, Staff};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_fields::{plain_options, update_with, CheckList, SelectField, TextField};
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};
use crate::services::logging::Logger;

const ALLERGY_OPTIONS: &[&str] = &["Peanuts", "Tree Nuts", "Milk", "Eggs", "Shellfish", "Soy"];
const MEDICATION_OPTIONS: &[&str] = &[
    "Ventolin (Salbutamol)",
    "EpiPen Jr",
    "Benadryl",
    "Tylenol",
    "Ritalin",
    "Flovent",
];
const CONDITION_OPTIONS: &[&str] = &["Asthma", "Type 1 Diabetes", "ADHD", "Epilepsy", "Eczema", "Cerebral Palsy"];

/// Selected items that are not one of the preset checkboxes, comma-joined
fn extras(selected: &[String], options: &[&str]) -> String {
    selected
        .iter()
        .filter(|item| !options.contains(&item.as_str()))
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace the free-text part of a selection, keeping checked presets
fn with_extras(selected: &[String], options: &[&str], text: &str) -> Vec<String> {
    selected
        .iter()
        .filter(|item| options.contains(&item.as_str()))
        .cloned()
        .chain(
            text.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from),
        )
        .collect()
}

/// Raw text of the "other" fields, split into entries only on save
#[derive(Clone, PartialEq, Default)]
struct OtherMedical {
    allergies: String,
    medications: String,
    conditions: String,
}

impl OtherMedical {
    fn from_form(form: &ChildForm) -> Self {
        Self {
            allergies: extras(&form.allergies, ALLERGY_OPTIONS),
            medications: extras(&form.medications, MEDICATION_OPTIONS),
            conditions: extras(&form.conditions, CONDITION_OPTIONS),
        }
    }

    fn apply_to(&self, form: &ChildForm) -> ChildForm {
        ChildForm {
            allergies: with_extras(&form.allergies, ALLERGY_OPTIONS, &self.allergies),
            medications: with_extras(&form.medications, MEDICATION_OPTIONS, &self.medications),
            conditions: with_extras(&form.conditions, CONDITION_OPTIONS, &self.conditions),
            ..form.clone()
        }
    }
}

fn update_row<T: Clone>(rows: &[Keyed<T>], key: Uuid, apply: impl FnOnce(&mut T)) -> Vec<Keyed<T>> {
    let mut rows = rows.to_vec();
    if let Some(row) = rows.iter_mut().find(|row| row.key == key) {
        apply(&mut row.record);
    }
    rows
}

fn remove_row<T: Clone>(rows: &[Keyed<T>], key: Uuid) -> Vec<Keyed<T>> {
    rows.iter().filter(|row| row.key != key).cloned().collect()
}

#[derive(Properties, PartialEq)]
struct MedicalChecksProps {
    id: AttrValue,
    label: AttrValue,
    options: &'static [&'static str],
    selected: Vec<String>,
    on_change: Callback<Vec<String>>,
    other: String,
    on_other: Callback<String>,
}

/// Preset checkboxes plus an "other" field for anything else
#[function_component(MedicalChecks)]
fn medical_checks(props: &MedicalChecksProps) -> Html {
    let i18n = use_language();
    let options = props.options;

    let on_toggle = {
        let selected = props.selected.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |item: String| on_change.emit(toggle_item(&selected, &item)))
    };

    html! {
        <div class="medical-checks">
            <CheckList
                id={props.id.clone()}
                label={props.label.clone()}
                options={plain_options(options)}
                selected={props.selected.clone()}
                {on_toggle}
            />
            <TextField
                id={format!("{}-other", props.id)}
                label={i18n.t("other")}
                value={props.other.clone()}
                on_change={props.on_other.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditChildFormProps {
    pub is_open: bool,
    /// `None` creates a new child
    #[prop_or_default]
    pub child: Option<ChildProfile>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<ChildProfile>,
}

#[function_component(EditChildForm)]
pub fn edit_child_form(props: &EditChildFormProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();

    let form = use_state(ChildForm::default);
    let other = use_state(OtherMedical::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);
    let age_groups = use_state(Vec::<AgeGroup>::new);
    let staff = use_state(Vec::<Staff>::new);

    // Reset state when the modal opens
    {
        let form = form.clone();
        let other = other.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let saving = saving.clone();
        use_effect_with((props.is_open, props.child.clone()), move |(is_open, child)| {
            if *is_open {
                let fresh = child.as_ref().map(ChildForm::from_profile).unwrap_or_default();
                other.set(OtherMedical::from_form(&fresh));
                form.set(fresh);
                errors.set(Vec::new());
                error_message.set(None);
                saving.set(false);
            }
            || ()
        });
    }

    {
        let age_groups = age_groups.clone();
        let staff = staff.clone();
        use_effect_with((props.is_open, auth.api()), move |(is_open, api)| {
            if *is_open {
                let api = api.clone();
                spawn_local(async move {
                    match api.age_groups().await {
                        Ok(list) => age_groups.set(list),
                        Err(e) => Logger::warn_with_component("edit_child_form", &format!("age groups: {}", e)),
                    }
                    match api.staff().await {
                        Ok(list) => staff.set(list),
                        Err(e) => Logger::warn_with_component("edit_child_form", &format!("staff: {}", e)),
                    }
                });
            }
            || ()
        });
    }

    let lang = i18n.lang;
    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let on_age_group = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.age_group_id = value.parse().ok();
            form.set(next);
        })
    };

    let on_status = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.status = ChildStatus::parse(&value).unwrap_or(ChildStatus::Enrolled);
            form.set(next);
        })
    };

    let set_list = |apply: fn(&mut ChildForm, Vec<String>)| {
        let form = form.clone();
        Callback::from(move |items: Vec<String>| {
            let mut next = (*form).clone();
            apply(&mut next, items);
            form.set(next);
        })
    };

    let on_staff = {
        let form = form.clone();
        Callback::from(move |value: String| {
            if let Ok(id) = value.parse::<i64>() {
                let mut next = (*form).clone();
                if next.assigned_staff_ids.contains(&id) {
                    next.assigned_staff_ids.retain(|existing| *existing != id);
                } else {
                    next.assigned_staff_ids.push(id);
                }
                form.set(next);
            }
        })
    };

    let edit_contact = |key: Uuid, apply: fn(&mut EmergencyContact, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.contacts = update_row(&next.contacts, key, |contact| apply(contact, value));
            form.set(next);
        })
    };

    let edit_access = |key: Uuid, apply: fn(&mut AccessPermission, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.access = update_row(&next.access, key, |row| apply(row, value));
            form.set(next);
        })
    };

    let add_contact = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.contacts.push(Keyed::new(EmergencyContact::default()));
            form.set(next);
        })
    };

    let add_access = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.access.push(Keyed::new(AccessPermission::default()));
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let other = other.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let saving = saving.clone();
        let api = auth.api();
        let child_id = props.child.as_ref().and_then(|child| child.id);
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            let payload = match validate_child_form(&other.apply_to(&form)) {
                Ok(payload) => payload,
                Err(problems) => {
                    error_message.set(summarize(&problems).map(|summary| summary.user_message(lang)));
                    errors.set(problems);
                    return;
                }
            };
            errors.set(Vec::new());
            error_message.set(None);
            saving.set(true);

            let api = api.clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let notify = notify.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result: Result<ChildProfile, ApiError> = match child_id {
                    Some(id) => api.update_child(id, &payload).await,
                    None => api.create_child(&payload).await,
                };
                saving.set(false);
                match result {
                    Ok(profile) => {
                        notify.emit(Notice::success(translate(lang, "childSaved")));
                        on_saved.emit(profile);
                    }
                    Err(e) => {
                        Logger::error_with_component("edit_child_form", &e.to_string());
                        error_message.set(Some(e.user_message(lang)));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let title = if props.child.is_some() { i18n.t("editChild") } else { i18n.t("addNewChild") };
    let age_group_options: Vec<(String, String)> = age_groups
        .iter()
        .filter(|group| group.is_active != Some(false))
        .map(|group| (group.id.to_string(), group.name.clone()))
        .collect();
    let status_options: Vec<(String, String)> = ChildStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), i18n.t_owned(&format!("childStatus.{}", status))))
        .collect();
    let staff_options: Vec<(String, String)> = staff
        .iter()
        .map(|member| (member.id.to_string(), member.full_name()))
        .collect();
    let staff_selected: Vec<String> = form.assigned_staff_ids.iter().map(i64::to_string).collect();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal modal-large" onclick={on_modal_click}>
                <h3 class="modal-title">{"👶 "}{title}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="error-message">{error}</div> }
                } else { html! {} }}

                <form class="child-form" onsubmit={on_submit}>
                    <section>
                        <h4>{i18n.t("basicInformation")}</h4>
                        <div class="form-row">
                            <TextField id="child-first-name" label={i18n.t("firstName")} required=true
                                value={form.first_name.clone()} error={field_error("first_name")}
                                on_change={update_with(&form, |f: &mut ChildForm, v: String| f.first_name = v)} />
                            <TextField id="child-last-name" label={i18n.t("lastName")} required=true
                                value={form.last_name.clone()} error={field_error("last_name")}
                                on_change={update_with(&form, |f: &mut ChildForm, v: String| f.last_name = v)} />
                        </div>
                        <div class="form-row">
                            <TextField id="child-dob" label={i18n.t("dateOfBirth")} input_type="date" required=true
                                value={form.date_of_birth.clone()} error={field_error("date_of_birth")}
                                on_change={update_with(&form, |f: &mut ChildForm, v: String| f.date_of_birth = v)} />
                            <SelectField id="child-age-group" label={i18n.t("ageGroup")}
                                options={age_group_options}
                                value={form.age_group_id.map(|id| id.to_string()).unwrap_or_default()}
                                placeholder={Some(AttrValue::from(i18n.t("selectAgeGroup")))}
                                error={field_error("age_group_id")}
                                on_change={on_age_group} />
                            <SelectField id="child-status" label={i18n.t("status")}
                                options={status_options}
                                value={form.status.as_str().to_string()}
                                on_change={on_status} />
                        </div>
                    </section>

                    <section>
                        <h4>{i18n.t("medicalInformation")}</h4>
                        <MedicalChecks id="allergies" label={i18n.t("allergies")}
                            options={ALLERGY_OPTIONS} selected={form.allergies.clone()}
                            on_change={set_list(|f, items| f.allergies = items)}
                            other={other.allergies.clone()}
                            on_other={update_with(&other, |o: &mut OtherMedical, v: String| o.allergies = v)} />
                        <MedicalChecks id="medications" label={i18n.t("medications")}
                            options={MEDICATION_OPTIONS} selected={form.medications.clone()}
                            on_change={set_list(|f, items| f.medications = items)}
                            other={other.medications.clone()}
                            on_other={update_with(&other, |o: &mut OtherMedical, v: String| o.medications = v)} />
                        <MedicalChecks id="conditions" label={i18n.t("medicalConditions")}
                            options={CONDITION_OPTIONS} selected={form.conditions.clone()}
                            on_change={set_list(|f, items| f.conditions = items)}
                            other={other.conditions.clone()}
                            on_other={update_with(&other, |o: &mut OtherMedical, v: String| o.conditions = v)} />
                    </section>

                    <section>
                        <h4>{i18n.t("emergencyContacts")}</h4>
                        {for form.contacts.iter().map(|row| {
                            let key = row.key;
                            let remove = {
                                let form = form.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*form).clone();
                                    next.contacts = remove_row(&next.contacts, key);
                                    form.set(next);
                                })
                            };
                            html! {
                                <div class="form-row row-editor" key={key.to_string()}>
                                    <TextField id={format!("contact-name-{}", key)} label={i18n.t("name")}
                                        value={row.record.name.clone()}
                                        on_change={edit_contact(key, |c, v| c.name = v)} />
                                    <TextField id={format!("contact-phone-{}", key)} label={i18n.t("phone")} input_type="tel"
                                        value={row.record.phone.clone()}
                                        on_change={edit_contact(key, |c, v| c.phone = v)} />
                                    <TextField id={format!("contact-relation-{}", key)} label={i18n.t("relation")}
                                        value={row.record.relation.clone()}
                                        on_change={edit_contact(key, |c, v| c.relation = v)} />
                                    <button type="button" class="btn btn-link" onclick={remove}>{i18n.t("common.remove")}</button>
                                </div>
                            }
                        })}
                        <button type="button" class="btn btn-outline" onclick={add_contact}>{"➕ "}{i18n.t("addContact")}</button>
                    </section>

                    <section>
                        <h4>{i18n.t("accessPermissions")}</h4>
                        {for form.access.iter().map(|row| {
                            let key = row.key;
                            let remove = {
                                let form = form.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*form).clone();
                                    next.access = remove_row(&next.access, key);
                                    form.set(next);
                                })
                            };
                            let on_authorized = {
                                let form = form.clone();
                                Callback::from(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    let checked = input.checked();
                                    let mut next = (*form).clone();
                                    next.access = update_row(&next.access, key, |row| row.is_authorized = checked);
                                    form.set(next);
                                })
                            };
                            html! {
                                <div class="form-row row-editor" key={key.to_string()}>
                                    <TextField id={format!("access-name-{}", key)} label={i18n.t("name")}
                                        value={row.record.name.clone()}
                                        on_change={edit_access(key, |a, v| a.name = v)} />
                                    <TextField id={format!("access-phone-{}", key)} label={i18n.t("phone")} input_type="tel"
                                        value={row.record.phone.clone()}
                                        on_change={edit_access(key, |a, v| a.phone = v)} />
                                    <TextField id={format!("access-relation-{}", key)} label={i18n.t("relation")}
                                        value={row.record.relation.clone()}
                                        on_change={edit_access(key, |a, v| a.relation = v)} />
                                    <label class="check-item">
                                        <input type="checkbox" checked={row.record.is_authorized} onchange={on_authorized} />
                                        {i18n.t("authorized")}
                                    </label>
                                    <button type="button" class="btn btn-link" onclick={remove}>{i18n.t("common.remove")}</button>
                                </div>
                            }
                        })}
                        <button type="button" class="btn btn-outline" onclick={add_access}>{"➕ "}{i18n.t("addPerson")}</button>
                    </section>

                    <section>
                        {if staff_options.is_empty() {
                            html! {
                                <>
                                    <h4>{i18n.t("assignedStaff")}</h4>
                                    <p class="muted">{i18n.t("noStaffAssigned")}</p>
                                </>
                            }
                        } else {
                            html! {
                                <CheckList id="assigned-staff" label={i18n.t("assignedStaff")}
                                    options={staff_options} selected={staff_selected} on_toggle={on_staff} />
                            }
                        }}
                    </section>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*saving}>
                            {if *saving { i18n.t("common.saving") } else { i18n.t("common.save") }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*saving}>
                            {i18n.t("common.cancel")}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_other_field_shows_non_preset_items() {
        let selected = vec!["Milk".to_string(), "Kiwi".to_string(), "Sesame".to_string()];
        assert_eq!(extras(&selected, ALLERGY_OPTIONS), "Kiwi, Sesame");
    }

    #[wasm_bindgen_test]
    fn test_other_field_replaces_free_text_only() {
        let selected = vec!["Milk".to_string(), "Kiwi".to_string()];
        let next = with_extras(&selected, ALLERGY_OPTIONS, "Sesame,  Latex ,");
        assert_eq!(next, vec!["Milk", "Sesame", "Latex"]);
        assert_eq!(with_extras(&next, ALLERGY_OPTIONS, ""), vec!["Milk"]);
    }

    /// Feeds `text` one key at a time, each key appended to what the field shows
    fn type_into(field: &mut String, text: &str) {
        for key in text.chars() {
            let mut shown = field.clone();
            shown.push(key);
            *field = shown;
        }
    }

    #[wasm_bindgen_test]
    fn test_other_text_survives_typing_key_by_key() {
        let form = ChildForm {
            allergies: vec!["Milk".to_string()],
            medications: vec!["Tylenol".to_string(), "Melatonin".to_string()],
            ..ChildForm::default()
        };
        let mut other = OtherMedical::from_form(&form);
        assert_eq!(other.allergies, "");
        assert_eq!(other.medications, "Melatonin");

        type_into(&mut other.allergies, "Sesame, Latex");
        type_into(&mut other.conditions, "Cow milk");
        assert_eq!(other.allergies, "Sesame, Latex");
        assert_eq!(other.conditions, "Cow milk");

        let saved = other.apply_to(&form);
        assert_eq!(saved.allergies, vec!["Milk", "Sesame", "Latex"]);
        assert_eq!(saved.medications, vec!["Tylenol", "Melatonin"]);
        assert_eq!(saved.conditions, vec!["Cow milk"]);
    }

    #[wasm_bindgen_test]
    fn test_row_edits_target_one_key() {
        let rows = vec![Keyed::new(EmergencyContact::default()), Keyed::new(EmergencyContact::default())];
        let target = rows[1].key;
        let edited = update_row(&rows, target, |c| c.name = "Mamie".to_string());
        assert_eq!(edited[0].record.name, "");
        assert_eq!(edited[1].record.name, "Mamie");
        assert_eq!(edited[1].key, target);

        let removed = remove_row(&edited, rows[0].key);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].key, target);
    }
}
