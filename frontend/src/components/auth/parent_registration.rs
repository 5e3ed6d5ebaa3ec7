use shared::validation::{error_for, summarize, validate_registration, FieldError};
use shared::{translate, ApiError, Invitation, ParentInfo, RegistrationRequest, Route, User, UserType, PROVINCES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{update_with, SelectField, TextField};
use crate::components::language_toggle::LanguageToggle;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};
use crate::hooks::use_route::{use_link, use_route};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
struct ParentForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: String,
    parent: ParentInfo,
}

impl ParentForm {
    fn to_request(&self, token: Option<&str>) -> RegistrationRequest {
        RegistrationRequest {
            user_type: UserType::Parent,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            daycare_info: None,
            parent_info: Some(self.parent.clone()),
            selected_plan_id: None,
            invitation_token: token.map(str::to_string),
        }
    }
}

/// Invitation lookup as shown above the form
#[derive(Clone, PartialEq)]
enum InvitationState {
    None,
    Checking,
    Valid(Invitation),
    Invalid(String),
}

#[derive(Properties, PartialEq)]
pub struct ParentRegistrationProps {
    #[prop_or_default]
    pub token: Option<String>,
}

#[function_component(ParentRegistration)]
pub fn parent_registration(props: &ParentRegistrationProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let navigate = use_route().navigate;
    let back = use_link(if props.token.is_some() { Route::Landing } else { Route::Register });

    let form = use_state(ParentForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);
    let invitation = use_state(|| InvitationState::None);

    let lang = i18n.lang;

    // Look the invitation up whenever the token in the link changes
    {
        let invitation = invitation.clone();
        let form = form.clone();
        use_effect_with(props.token.clone(), move |token| {
            match token.clone() {
                None => invitation.set(InvitationState::None),
                Some(token) => {
                    invitation.set(InvitationState::Checking);
                    spawn_local(async move {
                        match ApiClient::new().invitation(&token).await {
                            Ok(found) if found.valid => {
                                if let Some(email) = found.email.clone() {
                                    let mut next = (*form).clone();
                                    next.email = email;
                                    form.set(next);
                                }
                                invitation.set(InvitationState::Valid(found));
                            }
                            Ok(found) => invitation.set(InvitationState::Invalid(
                                found
                                    .message
                                    .unwrap_or_else(|| translate(lang, "registration.invalidInvitation").to_string()),
                            )),
                            Err(e) => {
                                Logger::warn_with_component("registration", &format!("invitation lookup failed: {}", e));
                                invitation.set(InvitationState::Invalid(e.user_message(lang)));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();
        let register = auth.actions.register.clone();
        let token = props.token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = form.to_request(token.as_deref());
            let problems = validate_registration(&request, &form.confirm_password);
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
                Callback::from(move |result: Result<User, ApiError>| {
                    submitting.set(false);
                    match result {
                        Ok(_) => {
                            notify.emit(Notice::success(translate(lang, "auth.registerSuccess")));
                            navigate.emit(Route::Dashboard);
                        }
                        Err(e) => error_message.set(Some(e.user_message(lang))),
                    }
                })
            };
            register.emit((request, done));
        })
    };

    let province_options: Vec<(String, String)> = PROVINCES
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

    let invitation_banner = match &*invitation {
        InvitationState::None => html! {},
        InvitationState::Checking => html! { <div class="info-message">{i18n.t("common.loading")}</div> },
        InvitationState::Valid(found) => html! {
            <div class="info-message">
                <strong>{i18n.t("registration.invitation")}</strong>
                {if let Some(child) = found.child_name.as_ref() {
                    html! { <p>{"👶 "}{child}</p> }
                } else { html! {} }}
                {if let Some(daycare) = found.daycare_name.as_ref() {
                    html! { <p>{i18n.t("registration.invitationFor")}{" "}{daycare}</p> }
                } else { html! {} }}
            </div>
        },
        InvitationState::Invalid(message) => html! { <div class="error-message">{message}</div> },
    };

    html! {
        <div class="auth-page">
            <div class="auth-topbar">
                <button class="btn btn-link" onclick={back}>
                    {"← "}
                    {if props.token.is_some() { i18n.t("common.backHome") } else { i18n.t("registration.backToSelection") }}
                </button>
                <LanguageToggle />
            </div>

            <div class="card auth-card auth-card-wide">
                <h2>{"👪 "}{i18n.t("registration.parentTitle")}</h2>
                {invitation_banner}
                {if let Some(message) = (*error_message).as_ref() {
                    html! { <div class="error-message">{message}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <h3 class="form-section">{i18n.t("registration.personalInfo")}</h3>
                    <div class="form-row">
                        <TextField id="first_name" label={i18n.t("firstName")} required=true
                            value={form.first_name.clone()} error={field_error("first_name")}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.first_name = v)} />
                        <TextField id="last_name" label={i18n.t("lastName")} required=true
                            value={form.last_name.clone()} error={field_error("last_name")}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.last_name = v)} />
                    </div>
                    <div class="form-row">
                        <TextField id="email" label={i18n.t("email")} input_type="email" required=true
                            value={form.email.clone()} error={field_error("email")}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.email = v)} />
                        <TextField id="phone" label={i18n.t("phone")} input_type="tel"
                            value={form.phone.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.phone = v)} />
                    </div>
                    <div class="form-row">
                        <TextField id="password" label={i18n.t("password")} input_type="password" required=true
                            value={form.password.clone()} error={field_error("password")}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.password = v)} />
                        <TextField id="confirm_password" label={i18n.t("confirmPassword")} input_type="password" required=true
                            value={form.confirm_password.clone()} error={field_error("confirm_password")}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.confirm_password = v)} />
                    </div>

                    <h3 class="form-section">{i18n.t("registration.address")}</h3>
                    <TextField id="address" label={i18n.t("registration.address")}
                        value={form.parent.address.clone()}
                        on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.address = v)} />
                    <div class="form-row">
                        <TextField id="city" label={i18n.t("registration.city")}
                            value={form.parent.city.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.city = v)} />
                        <SelectField id="province" label={i18n.t("registration.province")}
                            options={province_options} value={form.parent.province.clone()}
                            placeholder={Some(AttrValue::from(i18n.t("registration.selectProvince")))}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.province = v)} />
                        <TextField id="postal_code" label={i18n.t("registration.postalCode")}
                            value={form.parent.postal_code.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.postal_code = v)} />
                    </div>

                    <h3 class="form-section">{i18n.t("registration.emergencyContact")}</h3>
                    <div class="form-row">
                        <TextField id="emergency_name" label={i18n.t("name")}
                            value={form.parent.emergency_contact_name.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.emergency_contact_name = v)} />
                        <TextField id="emergency_phone" label={i18n.t("phone")} input_type="tel"
                            value={form.parent.emergency_contact_phone.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.emergency_contact_phone = v)} />
                        <TextField id="emergency_relation" label={i18n.t("relation")}
                            value={form.parent.emergency_contact_relation.clone()}
                            on_change={update_with(&form, |f: &mut ParentForm, v: String| f.parent.emergency_contact_relation = v)} />
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { i18n.t("common.saving") } else { i18n.t("form.createAccount") }}
                    </button>
                </form>
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
    fn test_request_carries_invitation_token() {
        let form = ParentForm {
            email: " parent@example.ca ".to_string(),
            ..ParentForm::default()
        };
        let request = form.to_request(Some("abc123"));
        assert_eq!(request.user_type, UserType::Parent);
        assert_eq!(request.email, "parent@example.ca");
        assert_eq!(request.invitation_token.as_deref(), Some("abc123"));
        assert!(request.daycare_info.is_none());
    }
}
