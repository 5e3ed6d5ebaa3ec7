use shared::{format_money, ParentDashboard as ParentOverview, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::stat_card::StatCard;
use crate::components::incidents::incident_list::IncidentList;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::use_error_reporter;
use crate::hooks::use_route::use_link;
use crate::services::date_utils::{child_age, display_date};

#[function_component(ParentDashboard)]
pub fn parent_dashboard() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let report_error = use_error_reporter("parent_dashboard");
    let overview = use_state(ParentOverview::default);
    let loading = use_state(|| true);
    let to_payments = use_link(Route::Payments);
    let to_incidents = use_link(Route::Incidents);

    {
        let overview = overview.clone();
        let loading = loading.clone();
        use_effect_with(auth.api(), move |api| {
            let api = api.clone();
            spawn_local(async move {
                match api.parent_dashboard().await {
                    Ok(data) => overview.set(data),
                    Err(e) => report_error.emit(e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingRow /> };
    }

    html! {
        <div class="page parent-dashboard">
            <div class="page-header">
                <h1>{"👪 "}{i18n.t("dashboard.parentTitle")}</h1>
            </div>

            <div class="stat-grid">
                <StatCard icon="👶" label={i18n.t("dashboard.myChildren")} value={overview.children.len().to_string()} />
                <StatCard icon="⚠️" label={i18n.t("dashboard.stats.recentIncidents")}
                    value={overview.recent_incidents.len().to_string()} onclick={Some(to_incidents)} />
                <StatCard icon="💳" label={i18n.t("dashboard.pendingInvoices")}
                    value={overview.pending_invoices.len().to_string()} onclick={Some(to_payments.clone())} />
            </div>

            <section>
                <h2>{i18n.t("dashboard.myChildren")}</h2>
                {if overview.children.is_empty() {
                    html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
                } else {
                    html! {
                        <div class="card-grid">
                            {for overview.children.iter().map(|child| {
                                let status = child.status.map(|s| i18n.t_owned(&format!("childStatus.{}", s))).unwrap_or_default();
                                html! {
                                    <div class="card child-card">
                                        <div class="avatar">{child.initials()}</div>
                                        <h3>{child.full_name()}</h3>
                                        <p><strong>{i18n.t("age")}{": "}</strong>
                                            {child_age(child.age.as_deref(), child.date_of_birth.as_deref(), i18n.lang)}</p>
                                        {if child.age_group.is_empty() { html! {} } else {
                                            html! { <p><strong>{i18n.t("ageGroup")}{": "}</strong>{&child.age_group}</p> }
                                        }}
                                        {if status.is_empty() { html! {} } else {
                                            html! { <span class="badge badge-info">{status}</span> }
                                        }}
                                    </div>
                                }
                            })}
                        </div>
                    }
                }}
            </section>

            <div class="dashboard-columns">
                <section class="card">
                    <h2>{"⚠️ "}{i18n.t("dashboard.stats.recentIncidents")}</h2>
                    <IncidentList incidents={overview.recent_incidents.clone()} />
                </section>
                <section class="card">
                    <h2>{"💳 "}{i18n.t("dashboard.pendingInvoices")}</h2>
                    {if overview.pending_invoices.is_empty() {
                        html! { <p class="empty-state">{i18n.t("payments.empty")}</p> }
                    } else {
                        html! {
                            <ul class="invoice-list">
                                {for overview.pending_invoices.iter().map(|invoice| html! {
                                    <li>
                                        <span>{&invoice.invoice_number}</span>
                                        <span>{format_money(invoice.balance, &invoice.currency)}</span>
                                        <span class="muted">{display_date(invoice.due_date.as_deref(), i18n.lang)}</span>
                                        <span class={invoice.status.badge_class()}>{invoice.status.as_str()}</span>
                                    </li>
                                })}
                            </ul>
                        }
                    }}
                    <button class="btn btn-primary" onclick={to_payments}>{i18n.t("payments.pay")}</button>
                </section>
            </div>
        </div>
    }
}
