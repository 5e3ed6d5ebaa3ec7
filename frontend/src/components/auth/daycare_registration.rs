use shared::adapter::toggle_item;
use shared::subscription::SubscribeRequest;
use shared::validation::{error_for, summarize, validate_registration, FieldError};
use shared::{
    translate, ApiError, DaycareInfo, ErrorCode, Language, PlanType, RegistrationRequest, Route, SubscriptionPlan, User,
    UserType, PROGRAM_TYPES, PROVINCES, SERVED_AGE_GROUPS,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{humanize, update_with, CheckList, SelectField, TextArea, TextField};
use crate::components::language_toggle::LanguageToggle;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};
use crate::hooks::use_route::{use_link, use_route};
use crate::hooks::use_subscription::use_subscription;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage;

#[derive(Clone, PartialEq, Default)]
struct DaycareForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: String,
    capacity: String,
    daycare: DaycareInfo,
}

impl DaycareForm {
    fn to_request(&self, plan: Option<&SubscriptionPlan>) -> RegistrationRequest {
        RegistrationRequest {
            user_type: UserType::Daycare,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            daycare_info: Some(DaycareInfo {
                capacity: self.capacity.trim().parse().ok(),
                ..self.daycare.clone()
            }),
            parent_info: None,
            selected_plan_id: plan.map(|p| p.id),
            invitation_token: None,
        }
    }
}

/// Backend rejections that belong to a single field
fn field_for(code: &ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::DuplicateLicenseNumber => Some("daycare.license_number"),
        ErrorCode::EmailExists | ErrorCode::InvalidEmail => Some("email"),
        ErrorCode::WeakPassword | ErrorCode::PasswordTooShort => Some("password"),
        _ => None,
    }
}

/// Activates the chosen plan for the account that was just created.
/// The session context has not re-rendered yet, so the new token is read
/// back from storage.
fn subscribe_after_registration(
    request: SubscribeRequest,
    select_plan: Callback<Option<SubscriptionPlan>>,
    notify: Callback<Notice>,
    lang: Language,
) {
    let api = ApiClient::new().with_token(storage::load_credentials().0);
    spawn_local(async move {
        match api.subscribe(&request).await {
            Ok(subscription) => {
                Logger::info_with_component("registration", &format!("plan {} is {}", request.plan_id, subscription.status.as_str()));
                select_plan.emit(None);
                notify.emit(Notice::success(translate(lang, "registration.subscriptionActivated")));
            }
            Err(e) => {
                Logger::warn_with_component("registration", &format!("subscription after registration failed: {}", e));
                notify.emit(Notice::error(translate(lang, "registration.subscriptionLater")));
            }
        }
    });
}

#[derive(Properties, PartialEq)]
struct PlanSummaryProps {
    plan: SubscriptionPlan,
}

#[function_component(PlanSummary)]
fn plan_summary(props: &PlanSummaryProps) -> Html {
    let i18n = use_language();
    let change_plan = use_link(Route::Landing);
    let plan = &props.plan;

    html! {
        <div class="card plan-summary">
            <div>
                <h3>{"👑 "}{i18n.t("selectedPlan")}{": "}{&plan.name}</h3>
                <p>{plan.price_label()}{" "}{plan.plan_type.period_label()}</p>
            </div>
            {if plan.plan_type == PlanType::Free {
                html! { <p class="hint">{i18n.t("registration.freeForParents")}</p> }
            } else { html! {} }}
            <button class="btn btn-outline" onclick={change_plan}>{i18n.t("registration.changePlan")}</button>
        </div>
    }
}

#[function_component(DaycareRegistration)]
pub fn daycare_registration() -> Html {
    let auth = use_auth();
    let subscription = use_subscription();
    let i18n = use_language();
    let notify = use_notice();
    let navigate = use_route().navigate;
    let back = use_link(Route::Register);

    let form = use_state(DaycareForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let lang = i18n.lang;
    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let toggle = |apply: fn(&mut DaycareInfo, &str)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next.daycare, &value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();
        let register = auth.actions.register.clone();
        let select_plan = subscription.actions.select_plan.clone();
        let selected_plan = subscription.state.selected_plan.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = form.to_request(selected_plan.as_ref());
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
                let errors = errors.clone();
                let error_message = error_message.clone();
                let submitting = submitting.clone();
                let navigate = navigate.clone();
                let notify = notify.clone();
                let select_plan = select_plan.clone();
                let selected_plan = selected_plan.clone();
                Callback::from(move |result: Result<User, ApiError>| {
                    submitting.set(false);
                    match result {
                        Ok(user) => {
                            notify.emit(Notice::success(translate(lang, "auth.registerSuccess")));
                            if let Some(plan) = selected_plan.as_ref() {
                                subscribe_after_registration(
                                    SubscribeRequest { plan_id: plan.id, daycare_id: user.daycare_id },
                                    select_plan.clone(),
                                    notify.clone(),
                                    lang,
                                );
                            }
                            navigate.emit(Route::Dashboard);
                        }
                        Err(e) => {
                            if let ApiError::Validation { code: Some(code), .. } = &e {
                                if let Some(field) = field_for(code) {
                                    errors.set(vec![FieldError::new(field, code.clone())]);
                                }
                            }
                            error_message.set(Some(e.user_message(lang)));
                        }
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
    let program_options: Vec<(String, String)> =
        PROGRAM_TYPES.iter().map(|v| (v.to_string(), humanize(v))).collect();
    let age_options: Vec<(String, String)> =
        SERVED_AGE_GROUPS.iter().map(|v| (v.to_string(), humanize(v))).collect();

    html! {
        <div class="auth-page">
            <div class="auth-topbar">
                <button class="btn btn-link" onclick={back}>{"← "}{i18n.t("registration.backToSelection")}</button>
                <LanguageToggle />
            </div>

            {if let Some(plan) = subscription.state.selected_plan.as_ref() {
                html! { <PlanSummary plan={plan.clone()} /> }
            } else { html! {} }}

            <div class="card auth-card auth-card-wide">
                <h2>{"🏫 "}{i18n.t("registration.daycareTitle")}</h2>
                {if let Some(message) = (*error_message).as_ref() {
                    html! { <div class="error-message">{message}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <h3 class="form-section">{i18n.t("registration.personalInfo")}</h3>
                    <div class="form-row">
                        <TextField id="first_name" label={i18n.t("firstName")} required=true
                            value={form.first_name.clone()} error={field_error("first_name")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.first_name = v)} />
                        <TextField id="last_name" label={i18n.t("lastName")} required=true
                            value={form.last_name.clone()} error={field_error("last_name")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.last_name = v)} />
                    </div>
                    <div class="form-row">
                        <TextField id="email" label={i18n.t("email")} input_type="email" required=true
                            value={form.email.clone()} error={field_error("email")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.email = v)} />
                        <TextField id="phone" label={i18n.t("phone")} input_type="tel"
                            value={form.phone.clone()}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.phone = v)} />
                    </div>
                    <div class="form-row">
                        <TextField id="password" label={i18n.t("password")} input_type="password" required=true
                            value={form.password.clone()} error={field_error("password")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.password = v)} />
                        <TextField id="confirm_password" label={i18n.t("confirmPassword")} input_type="password" required=true
                            value={form.confirm_password.clone()} error={field_error("confirm_password")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.confirm_password = v)} />
                    </div>

                    <h3 class="form-section">{i18n.t("registration.daycareInfo")}</h3>
                    <div class="form-row">
                        <TextField id="daycare_name" label={i18n.t("registration.daycareName")} required=true
                            value={form.daycare.name.clone()} error={field_error("daycare.name")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.name = v)} />
                        <TextField id="license_number" label={i18n.t("registration.licenseNumber")} required=true
                            value={form.daycare.license_number.clone()} error={field_error("daycare.license_number")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.license_number = v)} />
                    </div>
                    <TextField id="address" label={i18n.t("registration.address")} required=true
                        value={form.daycare.address.clone()} error={field_error("daycare.address")}
                        on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.address = v)} />
                    <div class="form-row">
                        <TextField id="city" label={i18n.t("registration.city")} required=true
                            value={form.daycare.city.clone()} error={field_error("daycare.city")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.city = v)} />
                        <SelectField id="province" label={i18n.t("registration.province")}
                            options={province_options} value={form.daycare.province.clone()}
                            placeholder={Some(AttrValue::from(i18n.t("registration.selectProvince")))}
                            error={field_error("daycare.province")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.province = v)} />
                        <TextField id="postal_code" label={i18n.t("registration.postalCode")} required=true
                            value={form.daycare.postal_code.clone()} error={field_error("daycare.postal_code")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.postal_code = v)} />
                    </div>
                    <div class="form-row">
                        <TextField id="daycare_phone" label={i18n.t("phone")} input_type="tel"
                            value={form.daycare.phone.clone()}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.phone = v)} />
                        <TextField id="daycare_email" label={i18n.t("email")} input_type="email"
                            value={form.daycare.email.clone()} error={field_error("daycare.email")}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.email = v)} />
                        <TextField id="capacity" label={i18n.t("registration.capacity")} input_type="number"
                            value={form.capacity.clone()}
                            on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.capacity = v)} />
                    </div>
                    <TextArea id="description" label={i18n.t("registration.description")}
                        value={form.daycare.description.clone()}
                        on_change={update_with(&form, |f: &mut DaycareForm, v: String| f.daycare.description = v)} />

                    <CheckList id="program_types" label={i18n.t("registration.programTypes")}
                        options={program_options} selected={form.daycare.program_types.clone()}
                        error={field_error("daycare.program_types")}
                        on_toggle={toggle(|d: &mut DaycareInfo, v: &str| d.program_types = toggle_item(&d.program_types, v))} />
                    <CheckList id="age_groups" label={i18n.t("registration.ageGroups")}
                        options={age_options} selected={form.daycare.age_groups.clone()}
                        error={field_error("daycare.age_groups")}
                        on_toggle={toggle(|d: &mut DaycareInfo, v: &str| d.age_groups = toggle_item(&d.age_groups, v))} />

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
    fn test_request_carries_plan_and_capacity() {
        let form = DaycareForm {
            first_name: " Marie ".to_string(),
            capacity: "24".to_string(),
            ..DaycareForm::default()
        };
        let plan = SubscriptionPlan { id: 3, ..SubscriptionPlan::default() };
        let request = form.to_request(Some(&plan));
        assert_eq!(request.first_name, "Marie");
        assert_eq!(request.selected_plan_id, Some(3));
        assert_eq!(request.daycare_info.and_then(|d| d.capacity), Some(24));
    }

    #[wasm_bindgen_test]
    fn test_backend_codes_map_to_fields() {
        assert_eq!(field_for(&ErrorCode::DuplicateLicenseNumber), Some("daycare.license_number"));
        assert_eq!(field_for(&ErrorCode::InternalError), None);
    }
}
