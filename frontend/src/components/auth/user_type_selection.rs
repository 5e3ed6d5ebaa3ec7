use shared::Route;
use yew::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::hooks::use_language::use_language;
use crate::hooks::use_route::{use_link, use_route};

#[function_component(UserTypeSelection)]
pub fn user_type_selection() -> Html {
    let i18n = use_language();
    let navigate = use_route().navigate;
    let to_landing = use_link(Route::Landing);
    let to_login = use_link(Route::Login);

    let choices = [
        ("🏫", "userTypes.daycare.title", "userTypes.daycare.description", Route::RegisterDaycare),
        ("👪", "userTypes.parent.title", "userTypes.parent.description", Route::RegisterParent { token: None }),
    ];

    html! {
        <div class="auth-page">
            <div class="auth-topbar">
                <button class="btn btn-link" onclick={to_landing}>{"← "}{i18n.t("common.backHome")}</button>
                <LanguageToggle />
            </div>
            <h1 class="page-title">{i18n.t("userTypes.title")}</h1>
            <p class="page-subtitle">{i18n.t("userTypes.subtitle")}</p>
            <div class="user-type-grid">
                {for choices.into_iter().map(|(icon, title, description, route)| {
                    let onclick = {
                        let navigate = navigate.clone();
                        Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
                    };
                    html! {
                        <div class="card user-type-card" {onclick}>
                            <div class="user-type-icon">{icon}</div>
                            <h3>{i18n.t(title)}</h3>
                            <p>{i18n.t(description)}</p>
                            <span class="btn btn-primary">{i18n.t("userTypes.getStarted")}</span>
                        </div>
                    }
                })}
            </div>
            <p class="auth-switch">
                {i18n.t("form.haveAccount")}{" "}
                <a href="#/login" onclick={to_login}>{i18n.t("signIn")}</a>
            </p>
        </div>
    }
}
