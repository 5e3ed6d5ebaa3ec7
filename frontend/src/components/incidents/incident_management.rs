use shared::{translate, ChildFilter, ChildProfile, Incident, IncidentStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::incident_form::IncidentForm;
use crate::components::form_fields::humanize;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_error_reporter, use_notice, Notice};
use crate::services::date_utils::display_date;

/// Status changes a daycare can make from the current status
fn next_statuses(status: IncidentStatus) -> &'static [IncidentStatus] {
    match status {
        IncidentStatus::Open => &[IncidentStatus::Resolved, IncidentStatus::Closed],
        IncidentStatus::Resolved => &[IncidentStatus::Closed],
        IncidentStatus::Closed | IncidentStatus::Unknown => &[],
    }
}

fn action_key(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Resolved => "incidents.resolve",
        _ => "incidents.close",
    }
}

#[derive(Properties, PartialEq)]
struct IncidentCardProps {
    incident: Incident,
    can_manage: bool,
    on_status: Callback<(i64, IncidentStatus)>,
}

#[function_component(IncidentCard)]
fn incident_card(props: &IncidentCardProps) -> Html {
    let i18n = use_language();
    let expanded = use_state(|| false);
    let incident = &props.incident;

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let actions = match (props.can_manage, incident.id) {
        (true, Some(id)) => next_statuses(incident.status)
            .iter()
            .map(|status| {
                let status = *status;
                let on_status = props.on_status.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    on_status.emit((id, status));
                });
                html! { <button class="btn btn-outline btn-small" {onclick}>{i18n.t(action_key(status))}</button> }
            })
            .collect::<Html>(),
        _ => html! {},
    };

    html! {
        <div class="card incident-card">
            <div class="incident-heading clickable" onclick={toggle}>
                <div>
                    <strong>{humanize(incident.heading())}</strong>
                    {incident.child_name.as_ref().map(|name| html! { <span class="muted">{" · "}{name}</span> }).unwrap_or_default()}
                </div>
                <div class="incident-meta">
                    <span class={classes!("badge", format!("badge-{}", incident.severity.as_str()))}>
                        {humanize(incident.severity.as_str())}
                    </span>
                    <span class={incident.status.badge_class()}>{humanize(incident.status.as_str())}</span>
                    <span class="muted">{display_date(incident.incident_date.as_deref(), i18n.lang)}</span>
                </div>
            </div>
            {if *expanded {
                html! {
                    <div class="incident-details">
                        <p>{&incident.description}</p>
                        {if incident.location.is_empty() { html! {} } else {
                            html! { <p><strong>{i18n.t("incidents.location")}{": "}</strong>{&incident.location}</p> }
                        }}
                        {if incident.immediate_action_taken.is_empty() { html! {} } else {
                            html! { <p><strong>{i18n.t("incidents.immediateAction")}{": "}</strong>{&incident.immediate_action_taken}</p> }
                        }}
                        <p><strong>{i18n.t("incidents.parentNotified")}{": "}</strong>
                            {if incident.parent_notified { "✅" } else { "—" }}</p>
                    </div>
                }
            } else { html! {} }}
            <div class="card-actions">{actions}</div>
        </div>
    }
}

#[function_component(IncidentManagement)]
pub fn incident_management() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let report_error = use_error_reporter("incident_management");

    let as_daycare = auth.session.is_daycare() || auth.session.is_admin();
    let incidents = use_state(Vec::<Incident>::new);
    let children = use_state(Vec::<ChildProfile>::new);
    let loading = use_state(|| true);
    let show_form = use_state(|| false);
    let reload = use_state(|| 0u32);

    {
        let incidents = incidents.clone();
        let children = children.clone();
        let loading = loading.clone();
        let report_error = report_error.clone();
        use_effect_with((auth.api(), as_daycare, *reload), move |(api, as_daycare, _)| {
            let api = api.clone();
            let as_daycare = *as_daycare;
            spawn_local(async move {
                match api.incidents(as_daycare).await {
                    Ok(list) => incidents.set(list),
                    Err(e) => report_error.emit(e),
                }
                if as_daycare {
                    if let Ok(list) = api.children(ChildFilter::All).await {
                        children.set(list);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_status = {
        let api = auth.api();
        let reload = reload.clone();
        let lang = i18n.lang;
        Callback::from(move |(id, status): (i64, IncidentStatus)| {
            let api = api.clone();
            let reload = reload.clone();
            let notify = notify.clone();
            let report_error = report_error.clone();
            spawn_local(async move {
                match api.set_incident_status(id, status).await {
                    Ok(()) => {
                        notify.emit(Notice::success(translate(lang, "incidents.updated")));
                        reload.set(*reload + 1);
                    }
                    Err(e) => report_error.emit(e),
                }
            });
        })
    };

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(false))
    };

    let on_created = {
        let show_form = show_form.clone();
        let reload = reload.clone();
        Callback::from(move |_: ()| {
            show_form.set(false);
            reload.set(*reload + 1);
        })
    };

    html! {
        <div class="page incident-management">
            <div class="page-header">
                <h1>{"⚠️ "}{i18n.t("incidents.title")}</h1>
                {if as_daycare && !*show_form {
                    html! { <button class="btn btn-primary" onclick={open_form}>{"➕ "}{i18n.t("incidents.new")}</button> }
                } else { html! {} }}
            </div>

            {if *show_form {
                html! { <IncidentForm children={(*children).clone()} on_created={on_created} on_cancel={close_form} /> }
            } else { html! {} }}

            {if *loading {
                html! { <LoadingRow /> }
            } else if incidents.is_empty() {
                html! { <p class="empty-state">{i18n.t("incidents.empty")}</p> }
            } else {
                html! {
                    <div class="incident-cards">
                        {for incidents.iter().map(|incident| html! {
                            <IncidentCard incident={incident.clone()} can_manage={as_daycare} on_status={on_status.clone()} />
                        })}
                    </div>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_only_open_incidents_can_be_resolved() {
        assert_eq!(next_statuses(IncidentStatus::Open), &[IncidentStatus::Resolved, IncidentStatus::Closed]);
        assert_eq!(next_statuses(IncidentStatus::Resolved), &[IncidentStatus::Closed]);
        assert!(next_statuses(IncidentStatus::Closed).is_empty());
        assert_eq!(action_key(IncidentStatus::Resolved), "incidents.resolve");
    }
}
