use shared::Incident;
use yew::prelude::*;

use crate::components::form_fields::humanize;
use crate::hooks::use_language::use_language;
use crate::services::date_utils::display_date;

#[derive(Properties, PartialEq)]
pub struct IncidentListProps {
    pub incidents: Vec<Incident>,
    #[prop_or(true)]
    pub show_child: bool,
    #[prop_or(AttrValue::Static("incidents.empty"))]
    pub empty_key: AttrValue,
}

/// Compact incident rows for dashboards and the child profile
#[function_component(IncidentList)]
pub fn incident_list(props: &IncidentListProps) -> Html {
    let i18n = use_language();

    if props.incidents.is_empty() {
        return html! { <p class="empty-state">{i18n.t_owned(&props.empty_key)}</p> };
    }

    html! {
        <ul class="incident-list">
            {for props.incidents.iter().map(|incident| html! {
                <li class="incident-row">
                    <div class="incident-heading">
                        <strong>{humanize(incident.heading())}</strong>
                        {if props.show_child {
                            incident.child_name.as_ref().map(|name| html! { <span class="muted">{" · "}{name}</span> }).unwrap_or_default()
                        } else { html! {} }}
                    </div>
                    <div class="incident-meta">
                        <span class={classes!("badge", format!("badge-{}", incident.severity.as_str()))}>
                            {incident.severity.as_str()}
                        </span>
                        <span class={incident.status.badge_class()}>{incident.status.as_str()}</span>
                        <span class="muted">{display_date(incident.incident_date.as_deref(), i18n.lang)}</span>
                    </div>
                </li>
            })}
        </ul>
    }
}
