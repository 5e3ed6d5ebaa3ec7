use shared::{Route, Session};
use yew::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_route::use_route;
use crate::hooks::use_subscription::use_subscription;

/// Sidebar entries for the signed-in role: `(icon, label key, route)`
fn navigation(session: &Session) -> Vec<(&'static str, &'static str, Route)> {
    let mut items = vec![("🏠", "nav.dashboard", session.default_dashboard())];
    if session.is_daycare() || session.is_admin() {
        items.push(("👶", "nav.children", Route::Children));
    }
    items.push(("⚠️", "nav.incidents", Route::Incidents));
    items.push(("💳", "nav.payments", Route::Payments));
    if session.is_daycare() || session.is_admin() {
        items.push(("🧸", "nav.ageGroups", Route::AgeGroups));
    }
    items.push(("⚙️", "nav.account", Route::Account));
    items
}

/// Child profiles highlight the children entry
fn is_current(item: &Route, current: &Route) -> bool {
    match (item, current) {
        (Route::Children, Route::ChildProfile { .. }) => true,
        _ => item == current,
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Html,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let router = use_route();
    let subscription = use_subscription();
    let sidebar_open = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let on_logout = {
        let logout = auth.actions.logout.clone();
        let navigate = router.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigate.emit(Route::Landing);
        })
    };

    let open_account = {
        let navigate = router.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Account))
    };

    let unread = subscription.state.unread_notifications();
    let user_name = auth
        .session
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_default();

    let trial_banner = if auth.session.is_daycare() && subscription.state.is_in_trial() {
        html! {
            <div class="subscription-banner">
                {"⏳ "}
                {format!("{} {}", subscription.state.days_until_trial_end(), i18n.t("subscription.trialDaysLeft"))}
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class={classes!("dashboard", (*sidebar_open).then_some("sidebar-open"))}>
            <aside class="sidebar">
                <div class="brand">
                    <span class="brand-icon">{"🍁"}</span>
                    <span>{"CareConnect"}</span>
                </div>
                <nav>
                    {for navigation(&auth.session).into_iter().map(|(icon, label, route)| {
                        let active = is_current(&route, &router.route);
                        let onclick = {
                            let navigate = router.navigate.clone();
                            let sidebar_open = sidebar_open.clone();
                            let route = route.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                sidebar_open.set(false);
                                navigate.emit(route.clone());
                            })
                        };
                        html! {
                            <a href={route.to_hash()} class={classes!("nav-item", active.then_some("active"))} {onclick}>
                                <span class="nav-icon">{icon}</span>
                                <span>{i18n.t(label)}</span>
                            </a>
                        }
                    })}
                </nav>
            </aside>

            <div class="dashboard-main">
                <header class="header">
                    <button class="btn btn-link sidebar-toggle" onclick={toggle_sidebar}>{"☰"}</button>
                    <div class="header-right">
                        <button class="btn btn-link notifications" onclick={open_account} title={i18n.t("subscription.notifications")}>
                            {"🔔"}
                            {if unread > 0 {
                                html! { <span class="badge badge-danger">{unread}</span> }
                            } else { html! {} }}
                        </button>
                        <LanguageToggle />
                        <span class="user-name">{"👤 "}{user_name}</span>
                        <button class="btn btn-secondary" onclick={on_logout}>{i18n.t("common.logout")}</button>
                    </div>
                </header>
                {trial_banner}
                <main class="content">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SessionAction, User, UserType};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session_for(user_type: UserType) -> Session {
        Session::default().apply(SessionAction::LoggedIn {
            token: "t".to_string(),
            user: User { user_type, ..User::default() },
        })
    }

    #[wasm_bindgen_test]
    fn test_parent_navigation_hides_daycare_pages() {
        let labels: Vec<_> = navigation(&session_for(UserType::Parent))
            .into_iter()
            .map(|(_, label, _)| label)
            .collect();
        assert!(!labels.contains(&"nav.children"));
        assert!(!labels.contains(&"nav.ageGroups"));
        assert!(labels.contains(&"nav.payments"));
    }

    #[wasm_bindgen_test]
    fn test_daycare_navigation_starts_at_daycare_dashboard() {
        let items = navigation(&session_for(UserType::Daycare));
        assert_eq!(items[0].2, Route::DaycareDashboard);
        assert!(items.iter().any(|(_, _, route)| *route == Route::AgeGroups));
    }

    #[wasm_bindgen_test]
    fn test_profile_highlights_children() {
        assert!(is_current(&Route::Children, &Route::ChildProfile { id: 2 }));
        assert!(!is_current(&Route::Payments, &Route::Children));
    }
}
