use shared::validation::{error_for, summarize, validate_login, FieldError};
use shared::{translate, LoginRequest, Route, User};
use yew::prelude::*;

use crate::components::form_fields::{bind, TextField};
use crate::components::language_toggle::LanguageToggle;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};
use crate::hooks::use_route::{use_link, use_route};
use crate::services::storage;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let navigate = use_route().navigate;
    let to_register = use_link(Route::Register);
    let to_landing = use_link(Route::Landing);

    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let field_error = |field: &str| {
        error_for(&errors, field).map(|code| translate(i18n.lang, &code.message_key()).to_string())
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();
        let login = auth.actions.login.clone();
        let lang = i18n.lang;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let problems = validate_login(&request);
            if let Some(summary) = summarize(&problems) {
                error_message.set(Some(summary.user_message(lang)));
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            error_message.set(None);
            submitting.set(true);

            let done = {
                let error_message = error_message.clone();
                let submitting = submitting.clone();
                let navigate = navigate.clone();
                let notify = notify.clone();
                Callback::from(move |result: Result<User, shared::ApiError>| {
                    submitting.set(false);
                    match result {
                        Ok(user) => {
                            notify.emit(Notice::success(format!(
                                "{}, {}",
                                translate(lang, "auth.welcomeBack"),
                                user.display_name()
                            )));
                            navigate.emit(storage::take_redirect().unwrap_or(Route::Dashboard));
                        }
                        Err(e) => error_message.set(Some(e.user_message(lang))),
                    }
                })
            };
            login.emit((request, done));
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-topbar">
                <a href="#/" class="brand-link" onclick={to_landing}>{"🍁 CareConnect"}</a>
                <LanguageToggle />
            </div>
            <div class="card auth-card">
                <h2>{i18n.t("signIn")}</h2>
                {if let Some(message) = (*error_message).as_ref() {
                    html! { <div class="error-message">{message}</div> }
                } else { html! {} }}
                <form onsubmit={on_submit}>
                    <TextField
                        id="email"
                        label={i18n.t("email")}
                        input_type="email"
                        value={(*email).clone()}
                        on_change={bind(&email)}
                        error={field_error("email")}
                        required=true
                    />
                    <TextField
                        id="password"
                        label={i18n.t("password")}
                        input_type="password"
                        value={(*password).clone()}
                        on_change={bind(&password)}
                        error={field_error("password")}
                        required=true
                    />
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { i18n.t("common.loading") } else { i18n.t("login") }}
                    </button>
                </form>
                <p class="auth-switch">
                    {i18n.t("form.noAccount")}{" "}
                    <a href="#/register" onclick={to_register}>{i18n.t("form.createAccount")}</a>
                </p>
            </div>
        </div>
    }
}
