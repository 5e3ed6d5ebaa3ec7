use shared::{format_money, Route};
use yew::prelude::*;

use super::stat_card::StatCard;
use crate::components::incidents::incident_list::IncidentList;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_daycare_stats::{use_daycare_stats, UseDaycareStatsResult};
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::use_error_reporter;
use crate::hooks::use_route::use_link;
use crate::services::date_utils::{format_long_date, today};

#[function_component(DaycareDashboard)]
pub fn daycare_dashboard() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let report_error = use_error_reporter("daycare_dashboard");
    let UseDaycareStatsResult { overview, loading } = use_daycare_stats(&auth.api(), report_error);

    let to_children = use_link(Route::Children);
    let to_incidents = use_link(Route::Incidents);
    let to_payments = use_link(Route::Payments);

    let first_name = auth
        .session
        .user
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    let stats = &overview.stats;
    let optional = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string());

    html! {
        <div class="page daycare-dashboard">
            <div class="page-header">
                <div>
                    <h1>{i18n.t("dashboard.goodMorning")}{" "}{first_name}</h1>
                    <p class="page-subtitle">{i18n.t("dashboard.subtitle")}</p>
                </div>
                <div class="today">
                    <span class="muted">{i18n.t("dashboard.todaysDate")}</span>
                    <strong>{format_long_date(today(), i18n.lang)}</strong>
                </div>
            </div>

            {if loading {
                html! { <LoadingRow /> }
            } else {
                html! {
                    <div class="stat-grid">
                        <StatCard icon="👶" label={i18n.t("dashboard.stats.enrolledChildren")}
                            value={stats.enrolled_children.to_string()} onclick={Some(to_children.clone())} />
                        <StatCard icon="✅" label={i18n.t("dashboard.stats.presentToday")}
                            value={optional(stats.present_today)} />
                        <StatCard icon="⚠️" label={i18n.t("dashboard.stats.recentIncidents")}
                            value={overview.incident_count().to_string()} onclick={Some(to_incidents.clone())} />
                        <StatCard icon="📋" label={i18n.t("dashboard.stats.waitlisted")}
                            value={stats.waitlisted.to_string()} />
                        {if let Some(balance) = stats.outstanding_balance {
                            html! {
                                <StatCard icon="💰" label={i18n.t("dashboard.stats.outstanding")}
                                    value={format_money(balance, "CAD")} onclick={Some(to_payments.clone())} />
                            }
                        } else { html! {} }}
                    </div>
                }
            }}

            <div class="dashboard-columns">
                <section class="card">
                    <h2>{"⚡ "}{i18n.t("dashboard.quickActions.title")}</h2>
                    <div class="quick-actions">
                        <button class="btn btn-primary" onclick={to_children.clone()}>
                            {"➕ "}{i18n.t("dashboard.quickActions.addChild")}
                        </button>
                        <button class="btn btn-secondary" onclick={to_incidents.clone()}>
                            {"📝 "}{i18n.t("dashboard.quickActions.reportIncident")}
                        </button>
                        <button class="btn btn-secondary" onclick={to_payments.clone()}>
                            {"💳 "}{i18n.t("dashboard.quickActions.createPayment")}
                        </button>
                        <button class="btn btn-outline" onclick={to_children.clone()}>
                            {"👀 "}{i18n.t("dashboard.viewChildren")}
                        </button>
                    </div>
                </section>

                <section class="card">
                    <h2>{"⚠️ "}{i18n.t("dashboard.stats.recentIncidents")}</h2>
                    <IncidentList incidents={overview.recent_incidents.clone()} />
                </section>
            </div>
        </div>
    }
}
