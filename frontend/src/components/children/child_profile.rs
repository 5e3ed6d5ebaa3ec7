use shared::{ChildProfile, Route, Severity, Staff};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::edit_child_form::EditChildForm;
use crate::components::incidents::incident_list::IncidentList;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::{use_language, LanguageContext};
use crate::hooks::use_notice::use_error_reporter;
use crate::hooks::use_route::use_link;
use crate::services::date_utils::{child_age, display_date};

/// Names of the assigned staff members that the staff list knows about
fn assigned_names(ids: &[i64], staff: &[Staff]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| staff.iter().find(|member| member.id == *id))
        .map(Staff::full_name)
        .collect()
}

fn severity_badge(severity: Option<Severity>, i18n: &LanguageContext) -> Html {
    match severity {
        Some(severity) => html! {
            <span class={severity.badge_class()}>{i18n.t_owned(&format!("severity.{}", severity.as_str()))}</span>
        },
        None => html! {},
    }
}

fn empty_or(is_empty: bool, empty_key: &'static str, i18n: &LanguageContext, body: Html) -> Html {
    if is_empty {
        html! { <p class="empty-state">{i18n.t(empty_key)}</p> }
    } else {
        body
    }
}

#[derive(Properties, PartialEq)]
pub struct ChildProfileViewProps {
    pub id: i64,
}

#[function_component(ChildProfileView)]
pub fn child_profile_view(props: &ChildProfileViewProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let report_error = use_error_reporter("child_profile");
    let back = use_link(Route::Children);

    let child = use_state(|| Option::<ChildProfile>::None);
    let staff = use_state(Vec::<Staff>::new);
    let loading = use_state(|| true);
    let editing = use_state(|| false);

    {
        let child = child.clone();
        let staff = staff.clone();
        let loading = loading.clone();
        use_effect_with((props.id, auth.api()), move |(id, api)| {
            let id = *id;
            let api = api.clone();
            spawn_local(async move {
                loading.set(true);
                match api.child(id).await {
                    Ok(profile) => child.set(Some(profile)),
                    Err(e) => report_error.emit(e),
                }
                if let Ok(list) = api.staff().await {
                    staff.set(list);
                }
                loading.set(false);
            });
            || ()
        });
    }

    let open_editor = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(false))
    };

    let on_saved = {
        let editing = editing.clone();
        let child = child.clone();
        Callback::from(move |profile: ChildProfile| {
            editing.set(false);
            child.set(Some(profile));
        })
    };

    if *loading {
        return html! { <LoadingRow /> };
    }

    let Some(profile) = (*child).clone() else {
        return html! {
            <div class="page child-profile">
                <button class="btn btn-link" onclick={back}>{"← "}{i18n.t("backToChildren")}</button>
                <p class="empty-state">{i18n.t("errors.NOT_FOUND")}</p>
            </div>
        };
    };

    let n_a = i18n.t("notAvailable");
    let medical = &profile.medical_info;
    let staff_names = assigned_names(&profile.assigned_staff_ids, &staff);

    html! {
        <div class="page child-profile">
            <div class="page-header">
                <button class="btn btn-link" onclick={back}>{"← "}{i18n.t("backToChildren")}</button>
                <button class="btn btn-primary" onclick={open_editor}>{"✏️ "}{i18n.t("editChild")}</button>
            </div>

            <div class="card profile-hero">
                <div class="avatar avatar-large">{profile.initials()}</div>
                <div>
                    <h1>{profile.full_name()}</h1>
                    <span class="muted">{i18n.t("age")}{": "}
                        {child_age(profile.age.as_deref(), profile.date_of_birth.as_deref(), i18n.lang)}</span>
                    {if let Some(status) = profile.status {
                        html! {
                            <span class={classes!("badge", format!("badge-{}", status.as_str()))}>
                                {i18n.t_owned(&format!("childStatus.{}", status))}
                            </span>
                        }
                    } else { html! {} }}
                </div>
            </div>

            <div class="profile-grid">
                <section class="card">
                    <h3>{"📋 "}{i18n.t("basicInformation")}</h3>
                    <dl class="details">
                        <dt>{i18n.t("dateOfBirth")}</dt>
                        <dd>{profile.date_of_birth.as_deref().map(|d| display_date(Some(d), i18n.lang)).unwrap_or_else(|| n_a.to_string())}</dd>
                        <dt>{i18n.t("ageGroup")}</dt>
                        <dd>{if profile.age_group.is_empty() { n_a.to_string() } else { profile.age_group.clone() }}</dd>
                        <dt>{i18n.t("enrollmentDate")}</dt>
                        <dd>{profile.enrollment_date.as_deref().map(|d| display_date(Some(d), i18n.lang)).unwrap_or_else(|| n_a.to_string())}</dd>
                    </dl>
                    {if let Some(notes) = profile.notes.as_ref().filter(|n| !n.trim().is_empty()) {
                        html! { <p class="notes">{notes}</p> }
                    } else { html! {} }}
                </section>

                <section class="card">
                    <h3>{"👪 "}{i18n.t("parentGuardianInformation")}</h3>
                    {empty_or(profile.parents.is_empty(), "noParent", &i18n, html! {
                        <ul class="people-list">
                            {for profile.parents.iter().map(|parent| html! {
                                <li>
                                    <strong>{parent.full_name()}</strong>
                                    {if parent.is_primary { html! { <span class="badge badge-info">{i18n.t("primaryContact")}</span> } } else { html! {} }}
                                    {if parent.can_pick_up { html! { <span class="badge badge-success">{i18n.t("canPickUp")}</span> } } else { html! {} }}
                                    <div class="muted">{&parent.email}{" · "}{&parent.phone}</div>
                                    {if parent.relation.is_empty() { html! {} } else {
                                        html! { <div class="muted">{i18n.t("relation")}{": "}{&parent.relation}</div> }
                                    }}
                                </li>
                            })}
                        </ul>
                    })}
                </section>

                <section class="card">
                    <h3>{"🚨 "}{i18n.t("emergencyContacts")}</h3>
                    {empty_or(profile.emergency_contacts.is_empty(), "noEmergencyContacts", &i18n, html! {
                        <ul class="people-list">
                            {for profile.emergency_contacts.iter().map(|contact| html! {
                                <li>
                                    <strong>{&contact.name}</strong>
                                    <div class="muted">{&contact.relation}{" · "}{&contact.phone}</div>
                                </li>
                            })}
                        </ul>
                    })}
                </section>

                <section class="card">
                    <h3>{"🔐 "}{i18n.t("accessPermissions")}</h3>
                    {empty_or(profile.access_permissions.is_empty(), "noAccessPermissions", &i18n, html! {
                        <ul class="people-list">
                            {for profile.access_permissions.iter().map(|person| html! {
                                <li>
                                    <strong>{&person.name}</strong>
                                    {if person.is_authorized {
                                        html! { <span class="badge badge-success">{i18n.t("authorized")}</span> }
                                    } else {
                                        html! { <span class="badge badge-danger">{i18n.t("notAuthorized")}</span> }
                                    }}
                                    {if person.phone.is_empty() && person.relation.is_empty() { html! {} } else {
                                        html! { <div class="muted">{&person.relation}{" · "}{&person.phone}</div> }
                                    }}
                                </li>
                            })}
                        </ul>
                    })}
                </section>

                <section class="card medical">
                    <h3>{"🏥 "}{i18n.t("medicalInformation")}</h3>
                    <h4>{i18n.t("allergies")}</h4>
                    {empty_or(medical.allergies.is_empty(), "noAllergies", &i18n, html! {
                        <ul>
                            {for medical.allergies.iter().map(|allergy| html! {
                                <li>
                                    <strong>{&allergy.name}</strong>{" "}
                                    {severity_badge(allergy.severity, &i18n)}
                                    {if allergy.reaction.is_empty() { html! {} } else {
                                        html! { <div class="muted">{&allergy.reaction}</div> }
                                    }}
                                </li>
                            })}
                        </ul>
                    })}
                    <h4>{i18n.t("medications")}</h4>
                    {empty_or(medical.medications.is_empty(), "noMedications", &i18n, html! {
                        <ul>
                            {for medical.medications.iter().map(|medication| html! {
                                <li>
                                    <strong>{&medication.name}</strong>
                                    {if medication.dosage.is_empty() { html! {} } else { html! { <span class="muted">{" · "}{&medication.dosage}</span> } }}
                                    {if medication.purpose.is_empty() { html! {} } else { html! { <div class="muted">{&medication.purpose}</div> } }}
                                </li>
                            })}
                        </ul>
                    })}
                    <h4>{i18n.t("medicalConditions")}</h4>
                    {empty_or(medical.conditions.is_empty(), "noConditions", &i18n, html! {
                        <ul>
                            {for medical.conditions.iter().map(|condition| html! {
                                <li>
                                    <strong>{&condition.name}</strong>{" "}
                                    {severity_badge(condition.severity, &i18n)}
                                    {if condition.description.is_empty() { html! {} } else {
                                        html! { <div class="muted">{&condition.description}</div> }
                                    }}
                                </li>
                            })}
                        </ul>
                    })}
                </section>

                <section class="card">
                    <h3>{"🧑‍🏫 "}{i18n.t("assignedStaff")}</h3>
                    {empty_or(staff_names.is_empty(), "noStaffAssigned", &i18n, html! {
                        <ul>{for staff_names.iter().map(|name| html! { <li>{name}</li> })}</ul>
                    })}
                </section>

                <section class="card">
                    <h3>{"⚠️ "}{i18n.t("recentIncidents")}</h3>
                    <IncidentList incidents={profile.recent_incidents.clone()} show_child=false empty_key="noRecentIncidents" />
                </section>
            </div>

            <EditChildForm
                is_open={*editing}
                child={Some(profile.clone())}
                on_close={close_editor}
                on_saved={on_saved}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::adapter::normalize_child;
    use shared::Language;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_assigned_names_skip_unknown_ids() {
        let staff = vec![
            Staff { id: 1, first_name: "Julie".to_string(), last_name: "Bouchard".to_string(), position: None },
            Staff { id: 2, first_name: "Marc".to_string(), last_name: "Lavoie".to_string(), position: None },
        ];
        assert_eq!(assigned_names(&[2, 9], &staff), vec!["Marc Lavoie".to_string()]);
        assert!(assigned_names(&[], &staff).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_legacy_allergies_render_without_badge() {
        let i18n = LanguageContext { lang: Language::En, set_language: Callback::noop() };
        let profile = normalize_child(&serde_json::json!({
            "id": 3,
            "first_name": "Emma",
            "allergies_csv": "Peanuts, Eggs"
        }));
        let allergies = &profile.medical_info.allergies;
        assert_eq!(allergies.len(), 2);
        for allergy in allergies {
            assert_eq!(severity_badge(allergy.severity, &i18n), html! {});
        }
        assert_ne!(severity_badge(Some(Severity::Moderate), &i18n), html! {});
    }
}
