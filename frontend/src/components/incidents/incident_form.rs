use shared::validation::{error_for, summarize, validate_incident, FieldError};
use shared::{translate, ChildProfile, IncidentSeverity, NewIncident};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_fields::{humanize, update_with, SelectField, TextArea, TextField};
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};
use crate::services::logging::Logger;

pub const INCIDENT_TYPES: [&str; 6] = ["injury", "illness", "behavioral", "accident", "allergic_reaction", "other"];

#[derive(Properties, PartialEq)]
pub struct IncidentFormProps {
    /// Children the incident can be reported for
    pub children: Vec<ChildProfile>,
    pub on_created: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(IncidentForm)]
pub fn incident_form(props: &IncidentFormProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();

    let incident = use_state(NewIncident::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let lang = i18n.lang;
    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let on_child = update_with(&incident, |i: &mut NewIncident, v: String| i.child_id = v.parse().ok());
    let on_severity = update_with(&incident, |i: &mut NewIncident, v: String| i.severity = IncidentSeverity::parse(&v));

    let on_parent_notified = {
        let incident = incident.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*incident).clone();
            next.parent_notified = input.checked();
            incident.set(next);
        })
    };

    let on_submit = {
        let incident = incident.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();
        let api = auth.api();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let problems = validate_incident(&incident);
            if let Some(summary) = summarize(&problems) {
                error_message.set(Some(summary.user_message(lang)));
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            error_message.set(None);
            submitting.set(true);

            let request = (*incident).clone();
            let api = api.clone();
            let incident = incident.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let notify = notify.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match api.create_incident(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("incident_form", &format!("reported {} incident", request.incident_type));
                        incident.set(NewIncident::default());
                        notify.emit(Notice::success(translate(lang, "incidents.created")));
                        on_created.emit(());
                    }
                    Err(e) => error_message.set(Some(e.user_message(lang))),
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let child_options: Vec<(String, String)> = props
        .children
        .iter()
        .filter_map(|child| child.id.map(|id| (id.to_string(), child.full_name())))
        .collect();
    let type_options: Vec<(String, String)> = INCIDENT_TYPES
        .iter()
        .map(|kind| (kind.to_string(), humanize(kind)))
        .collect();
    let severity_options: Vec<(String, String)> = IncidentSeverity::CHOICES
        .iter()
        .map(|level| (level.as_str().to_string(), humanize(level.as_str())))
        .collect();

    html! {
        <form class="card incident-form" onsubmit={on_submit}>
            <h2>{"📝 "}{i18n.t("incidents.new")}</h2>
            {if let Some(error) = (*error_message).clone() {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}

            <div class="form-row">
                <SelectField id="incident-child" label={i18n.t("incidents.child")}
                    options={child_options}
                    value={incident.child_id.map(|id| id.to_string()).unwrap_or_default()}
                    placeholder={Some(AttrValue::from(i18n.t("incidents.selectChild")))}
                    error={field_error("child_id")}
                    on_change={on_child} />
                <SelectField id="incident-type" label={i18n.t("incidents.type")}
                    options={type_options}
                    value={incident.incident_type.clone()}
                    placeholder={Some(AttrValue::from(i18n.t("incidents.selectType")))}
                    error={field_error("incident_type")}
                    on_change={update_with(&incident, |i: &mut NewIncident, v: String| i.incident_type = v)} />
                <SelectField id="incident-severity" label={i18n.t("incidents.severity")}
                    options={severity_options}
                    value={incident.severity.as_str().to_string()}
                    on_change={on_severity} />
            </div>

            <TextArea id="incident-description" label={i18n.t("incidents.description")} rows={4}
                value={incident.description.clone()} error={field_error("description")}
                on_change={update_with(&incident, |i: &mut NewIncident, v: String| i.description = v)} />

            <div class="form-row">
                <TextField id="incident-location" label={i18n.t("incidents.location")}
                    value={incident.location.clone()}
                    on_change={update_with(&incident, |i: &mut NewIncident, v: String| i.location = v)} />
                <TextField id="incident-witnesses" label={i18n.t("incidents.witnesses")}
                    value={incident.witnesses.clone()}
                    on_change={update_with(&incident, |i: &mut NewIncident, v: String| i.witnesses = v)} />
            </div>

            <TextArea id="incident-action" label={i18n.t("incidents.immediateAction")}
                value={incident.immediate_action.clone()}
                on_change={update_with(&incident, |i: &mut NewIncident, v: String| i.immediate_action = v)} />

            <label class="check-item">
                <input type="checkbox" checked={incident.parent_notified} onchange={on_parent_notified} />
                {i18n.t("incidents.parentNotified")}
            </label>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { i18n.t("common.saving") } else { i18n.t("incidents.report") }}
                </button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*submitting}>
                    {i18n.t("common.cancel")}
                </button>
            </div>
        </form>
    }
}
