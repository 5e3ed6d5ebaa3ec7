use shared::{guard, Guard, Route};
use yew::prelude::*;

use super::account::manage_account::ManageAccount;
use super::age_groups::manage_age_groups::ManageAgeGroups;
use super::auth::daycare_registration::DaycareRegistration;
use super::auth::login_form::LoginForm;
use super::auth::parent_registration::ParentRegistration;
use super::auth::user_type_selection::UserTypeSelection;
use super::children::child_profile::ChildProfileView;
use super::children::children_management::ChildrenManagement;
use super::dashboard::admin_dashboard::AdminDashboard;
use super::dashboard::daycare_dashboard::DaycareDashboard;
use super::dashboard::layout::DashboardLayout;
use super::dashboard::parent_dashboard::ParentDashboard;
use super::incidents::incident_management::IncidentManagement;
use super::landing_page::LandingPage;
use super::loading::LoadingScreen;
use super::payments::payment_management::PaymentManagement;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_route::use_route;
use crate::services::logging::Logger;
use crate::services::storage;

/// Page body for an allowed route
fn view(route: &Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Login => html! { <LoginForm /> },
        Route::Register => html! { <UserTypeSelection /> },
        Route::RegisterDaycare => html! { <DaycareRegistration /> },
        Route::RegisterParent { token } => html! { <ParentRegistration token={token.clone()} /> },
        Route::Dashboard => html! { <LoadingScreen /> },
        Route::AdminDashboard => dashboard_page(html! { <AdminDashboard /> }),
        Route::DaycareDashboard => dashboard_page(html! { <DaycareDashboard /> }),
        Route::ParentDashboard => dashboard_page(html! { <ParentDashboard /> }),
        Route::Children => dashboard_page(html! { <ChildrenManagement /> }),
        Route::ChildProfile { id } => dashboard_page(html! { <ChildProfileView id={*id} /> }),
        Route::Incidents => dashboard_page(html! { <IncidentManagement /> }),
        Route::Payments => dashboard_page(html! { <PaymentManagement /> }),
        Route::Account => dashboard_page(html! { <ManageAccount /> }),
        Route::AgeGroups => dashboard_page(html! { <ManageAgeGroups /> }),
    }
}

fn dashboard_page(content: Html) -> Html {
    html! { <DashboardLayout>{content}</DashboardLayout> }
}

/// Applies the route guard and renders the current page
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let router = use_route();
    let auth = use_auth();
    let decision = guard(&router.route, &auth.session);

    {
        let navigate = router.navigate.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let Guard::Redirect { to, remember } = decision {
                if let Some(route) = remember {
                    storage::remember_redirect(route);
                }
                Logger::debug_with_component("router", &format!("redirecting to {}", to.to_path()));
                navigate.emit(to.clone());
            }
            || ()
        });
    }

    match decision {
        Guard::Allow => view(&router.route),
        Guard::Pending | Guard::Redirect { .. } => html! { <LoadingScreen /> },
    }
}
