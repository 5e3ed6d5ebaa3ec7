use shared::validation::{error_for, summarize, validate_password_change, FieldError};
use shared::{translate, ApiError, Language, PasswordChange, ProfileUpdate, User};
use yew::prelude::*;

use super::subscription_panel::SubscriptionPanel;
use crate::components::form_fields::{update_with, SelectField, TextField};
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Password,
    Subscription,
}

impl Tab {
    fn label_key(&self) -> &'static str {
        match self {
            Tab::Profile => "account.profile",
            Tab::Password => "account.changePassword",
            Tab::Subscription => "subscription.title",
        }
    }
}

/// Subscriptions belong to daycare accounts
fn tabs_for(is_daycare: bool) -> Vec<Tab> {
    let mut tabs = vec![Tab::Profile, Tab::Password];
    if is_daycare {
        tabs.push(Tab::Subscription);
    }
    tabs
}

fn profile_from(user: Option<&User>, lang: Language) -> ProfileUpdate {
    match user {
        Some(user) => ProfileUpdate {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            preferred_language: user
                .preferred_language
                .clone()
                .unwrap_or_else(|| lang.code().to_string()),
        },
        None => ProfileUpdate {
            preferred_language: lang.code().to_string(),
            ..ProfileUpdate::default()
        },
    }
}

#[derive(Clone, PartialEq, Default)]
struct PasswordForm {
    current: String,
    new_password: String,
    confirm: String,
}

#[function_component(ProfileTab)]
fn profile_tab() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let lang = i18n.lang;

    let profile = use_state(|| profile_from(auth.session.user.as_ref(), lang));
    let error_message = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let on_submit = {
        let profile = profile.clone();
        let error_message = error_message.clone();
        let saving = saving.clone();
        let update_profile = auth.actions.update_profile.clone();
        let set_language = i18n.set_language.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if profile.first_name.trim().is_empty() || profile.last_name.trim().is_empty() {
                error_message.set(Some(translate(lang, "errors.FILL_ALL_REQUIRED").to_string()));
                return;
            }
            error_message.set(None);
            saving.set(true);

            let request = (*profile).clone();
            let done = {
                let saving = saving.clone();
                let error_message = error_message.clone();
                let notify = notify.clone();
                let set_language = set_language.clone();
                Callback::from(move |result: Result<User, ApiError>| {
                    saving.set(false);
                    match result {
                        Ok(user) => {
                            if let Some(preferred) = user.preferred_language.as_deref().and_then(Language::from_code) {
                                set_language.emit(preferred);
                            }
                            notify.emit(Notice::success(translate(lang, "account.profileUpdated")));
                        }
                        Err(e) => error_message.set(Some(e.user_message(lang))),
                    }
                })
            };
            update_profile.emit((request, done));
        })
    };

    let email = auth.session.user.as_ref().map(|user| user.email.clone()).unwrap_or_default();
    let language_options = vec![
        ("en".to_string(), "English".to_string()),
        ("fr".to_string(), "Français".to_string()),
    ];

    html! {
        <form class="account-form" onsubmit={on_submit}>
            {if let Some(error) = (*error_message).clone() {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}
            <div class="form-row">
                <TextField id="profile-first-name" label={i18n.t("firstName")} required=true
                    value={profile.first_name.clone()}
                    on_change={update_with(&profile, |p: &mut ProfileUpdate, v: String| p.first_name = v)} />
                <TextField id="profile-last-name" label={i18n.t("lastName")} required=true
                    value={profile.last_name.clone()}
                    on_change={update_with(&profile, |p: &mut ProfileUpdate, v: String| p.last_name = v)} />
            </div>
            <TextField id="profile-email" label={i18n.t("email")} value={email} disabled=true
                on_change={Callback::noop()} />
            <TextField id="profile-phone" label={i18n.t("phone")} input_type="tel"
                value={profile.phone.clone()}
                on_change={update_with(&profile, |p: &mut ProfileUpdate, v: String| p.phone = v)} />
            <SelectField id="profile-language" label={i18n.t("account.preferredLanguage")}
                options={language_options} value={profile.preferred_language.clone()}
                on_change={update_with(&profile, |p: &mut ProfileUpdate, v: String| p.preferred_language = v)} />
            <button type="submit" class="btn btn-primary" disabled={*saving}>
                {if *saving { i18n.t("common.saving") } else { i18n.t("common.save") }}
            </button>
        </form>
    }
}

#[function_component(PasswordTab)]
fn password_tab() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let lang = i18n.lang;

    let form = use_state(PasswordForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let saving = saving.clone();
        let change_password = auth.actions.change_password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let problems = validate_password_change(&form.current, &form.new_password, &form.confirm);
            if let Some(summary) = summarize(&problems) {
                error_message.set(Some(summary.user_message(lang)));
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            error_message.set(None);
            saving.set(true);

            let request = PasswordChange {
                current_password: form.current.clone(),
                new_password: form.new_password.clone(),
            };
            let done = {
                let form = form.clone();
                let saving = saving.clone();
                let error_message = error_message.clone();
                let notify = notify.clone();
                Callback::from(move |result: Result<(), ApiError>| {
                    saving.set(false);
                    match result {
                        Ok(()) => {
                            form.set(PasswordForm::default());
                            notify.emit(Notice::success(translate(lang, "account.passwordChanged")));
                        }
                        Err(e) => error_message.set(Some(e.user_message(lang))),
                    }
                })
            };
            change_password.emit((request, done));
        })
    };

    html! {
        <form class="account-form" onsubmit={on_submit}>
            {if let Some(error) = (*error_message).clone() {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}
            <TextField id="current-password" label={i18n.t("account.currentPassword")} input_type="password" required=true
                value={form.current.clone()} error={field_error("current_password")}
                on_change={update_with(&form, |f: &mut PasswordForm, v: String| f.current = v)} />
            <TextField id="new-password" label={i18n.t("account.newPassword")} input_type="password" required=true
                value={form.new_password.clone()} error={field_error("new_password")}
                on_change={update_with(&form, |f: &mut PasswordForm, v: String| f.new_password = v)} />
            <TextField id="confirm-new-password" label={i18n.t("confirmPassword")} input_type="password" required=true
                value={form.confirm.clone()} error={field_error("confirm_password")}
                on_change={update_with(&form, |f: &mut PasswordForm, v: String| f.confirm = v)} />
            <button type="submit" class="btn btn-primary" disabled={*saving}>
                {if *saving { i18n.t("common.saving") } else { i18n.t("account.changePassword") }}
            </button>
        </form>
    }
}

#[function_component(ManageAccount)]
pub fn manage_account() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let tab = use_state(|| Tab::Profile);

    let tabs = tabs_for(auth.session.is_daycare());

    html! {
        <div class="page manage-account">
            <div class="page-header">
                <h1>{"⚙️ "}{i18n.t("account.title")}</h1>
            </div>
            <div class="tabs">
                {for tabs.into_iter().map(|item| {
                    let onclick = {
                        let tab = tab.clone();
                        Callback::from(move |_: MouseEvent| tab.set(item))
                    };
                    html! {
                        <button class={classes!("tab", (*tab == item).then_some("active"))} {onclick}>
                            {i18n.t(item.label_key())}
                        </button>
                    }
                })}
            </div>
            <div class="card">
                {match *tab {
                    Tab::Profile => html! { <ProfileTab /> },
                    Tab::Password => html! { <PasswordTab /> },
                    Tab::Subscription => html! { <SubscriptionPanel /> },
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_only_daycares_see_subscription_tab() {
        assert_eq!(tabs_for(false), vec![Tab::Profile, Tab::Password]);
        assert!(tabs_for(true).contains(&Tab::Subscription));
    }

    #[wasm_bindgen_test]
    fn test_profile_prefills_from_user() {
        let user = User {
            first_name: "Anne".to_string(),
            last_name: "Gagnon".to_string(),
            phone: Some("514-555-0101".to_string()),
            ..User::default()
        };
        let profile = profile_from(Some(&user), Language::Fr);
        assert_eq!(profile.phone, "514-555-0101");
        assert_eq!(profile.preferred_language, "fr");
        assert_eq!(profile_from(None, Language::En).preferred_language, "en");
    }
}
