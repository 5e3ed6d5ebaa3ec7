use shared::{DaycareSummary, User, UserType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::stat_card::StatCard;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::use_error_reporter;

fn user_type_label(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Admin => "admin",
        UserType::Daycare => "daycare",
        UserType::Parent => "parent",
        UserType::Unknown => "-",
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let report_error = use_error_reporter("admin_dashboard");
    let daycares = use_state(Vec::<DaycareSummary>::new);
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);

    {
        let daycares = daycares.clone();
        let users = users.clone();
        let loading = loading.clone();
        use_effect_with(auth.api(), move |api| {
            let api = api.clone();
            spawn_local(async move {
                match api.admin_daycares().await {
                    Ok(list) => daycares.set(list),
                    Err(e) => report_error.emit(e),
                }
                match api.admin_users().await {
                    Ok(list) => users.set(list),
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

    let parents = users.iter().filter(|u| u.user_type == UserType::Parent).count();

    html! {
        <div class="page admin-dashboard">
            <div class="page-header">
                <h1>{"🛡️ "}{i18n.t("dashboard.adminTitle")}</h1>
            </div>

            <div class="stat-grid">
                <StatCard icon="🏫" label={i18n.t("dashboard.daycares")} value={daycares.len().to_string()} />
                <StatCard icon="👥" label={i18n.t("dashboard.users")} value={users.len().to_string()} />
                <StatCard icon="👪" label={i18n.t("userTypes.parent.title")} value={parents.to_string()} />
            </div>

            <section class="card">
                <h2>{i18n.t("dashboard.daycares")}</h2>
                {if daycares.is_empty() {
                    html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
                } else {
                    html! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{i18n.t("name")}</th>
                                    <th>{i18n.t("registration.licenseNumber")}</th>
                                    <th>{i18n.t("registration.city")}</th>
                                    <th>{i18n.t("status")}</th>
                                    <th>{i18n.t("nav.children")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for daycares.iter().map(|daycare| html! {
                                    <tr>
                                        <td>{&daycare.name}</td>
                                        <td>{&daycare.license_number}</td>
                                        <td>{format!("{}, {}", daycare.city, daycare.province)}</td>
                                        <td><span class="badge badge-info">{&daycare.status}</span></td>
                                        <td>{daycare.children_count.map(|c| c.to_string()).unwrap_or_default()}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section class="card">
                <h2>{i18n.t("dashboard.users")}</h2>
                {if users.is_empty() {
                    html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
                } else {
                    html! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{i18n.t("name")}</th>
                                    <th>{i18n.t("email")}</th>
                                    <th>{i18n.t("status")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for users.iter().map(|user| html! {
                                    <tr>
                                        <td>{user.display_name()}</td>
                                        <td>{&user.email}</td>
                                        <td><span class="badge badge-muted">{user_type_label(user.user_type)}</span></td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>
        </div>
    }
}
