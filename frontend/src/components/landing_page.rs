use shared::{Route, SubscriptionPlan};
use yew::prelude::*;

use super::language_toggle::LanguageToggle;
use super::loading::LoadingRow;
use crate::hooks::use_language::use_language;
use crate::hooks::use_route::{use_link, use_route};
use crate::hooks::use_subscription::use_subscription;

const FEATURES: [(&str, &str, &str); 4] = [
    ("👶", "childCenteredProfiles", "childCenteredProfilesDesc"),
    ("💬", "transparentCommunication", "transparentCommunicationDesc"),
    ("💳", "simplifiedBilling", "simplifiedBillingDesc"),
    ("🌐", "bilingualSupport", "bilingualSupportDesc"),
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: SubscriptionPlan,
    selected: bool,
    on_choose: Callback<SubscriptionPlan>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let i18n = use_language();
    let onclick = {
        let plan = props.plan.clone();
        let on_choose = props.on_choose.clone();
        Callback::from(move |_: MouseEvent| on_choose.emit(plan.clone()))
    };

    html! {
        <div class={classes!("card", "plan-card", props.selected.then_some("plan-card-selected"))}>
            <h3>{&props.plan.name}</h3>
            <div class="plan-price">
                <span class="price">{props.plan.price_label()}</span>
                <span class="period">{props.plan.plan_type.period_label()}</span>
            </div>
            {if props.plan.description.is_empty() { html! {} } else {
                html! { <p class="plan-description">{&props.plan.description}</p> }
            }}
            <ul class="plan-features">
                {for props.plan.features.iter().map(|feature| html! { <li>{"✓ "}{feature}</li> })}
            </ul>
            <button class="btn btn-primary" {onclick}>{i18n.t("choosePlan")}</button>
        </div>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let i18n = use_language();
    let subscription = use_subscription();
    let navigate = use_route().navigate;
    let to_login = use_link(Route::Login);
    let to_register = use_link(Route::Register);
    let to_daycare = use_link(Route::RegisterDaycare);
    let to_parent = use_link(Route::RegisterParent { token: None });

    {
        let load_plans = subscription.actions.load_plans.clone();
        use_effect_with((), move |_| {
            load_plans.emit(());
            || ()
        });
    }

    let on_choose = {
        let select_plan = subscription.actions.select_plan.clone();
        Callback::from(move |plan: SubscriptionPlan| {
            select_plan.emit(Some(plan));
            navigate.emit(Route::RegisterDaycare);
        })
    };

    let selected_id = subscription.state.selected_plan.as_ref().map(|p| p.id);

    html! {
        <div class="landing">
            <nav class="landing-nav">
                <div class="brand">
                    <span class="brand-icon">{"🍁"}</span>
                    <div>
                        <h1>{"CareConnect"}</h1>
                        <p>{"Canada"}</p>
                    </div>
                </div>
                <div class="nav-actions">
                    <LanguageToggle />
                    <button class="btn btn-outline" onclick={to_login.clone()}>{i18n.t("signIn")}</button>
                </div>
            </nav>

            <section class="hero">
                <h1>{i18n.t("heroTitle")}</h1>
                <p class="hero-subtitle">{i18n.t("heroSubtitle")}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-large" onclick={to_register}>
                        {i18n.t("startYourJourney")}{" →"}
                    </button>
                    <button class="btn btn-secondary btn-large" onclick={to_login}>{i18n.t("signIn")}</button>
                </div>
                <p class="hint">{i18n.t("newToCareConnect")}</p>
            </section>

            <section class="features">
                <h2>{i18n.t("featuresTitle")}</h2>
                <p class="section-subtitle">{i18n.t("featuresSubtitle")}</p>
                <div class="feature-grid">
                    {for FEATURES.iter().map(|(icon, title, desc)| html! {
                        <div class="feature">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{i18n.t(*title)}</h3>
                            <p>{i18n.t(*desc)}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="pricing">
                <h2>{i18n.t("pricing")}</h2>
                {if subscription.state.loading {
                    html! { <LoadingRow /> }
                } else {
                    html! {
                        <div class="plan-grid">
                            {for subscription.state.plans.iter().map(|plan| html! {
                                <PlanCard
                                    key={plan.id}
                                    plan={plan.clone()}
                                    selected={Some(plan.id) == selected_id}
                                    on_choose={on_choose.clone()}
                                />
                            })}
                        </div>
                    }
                }}
            </section>

            <section class="audiences">
                <div class="card audience">
                    <h3>{"🏫 "}{i18n.t("forChildcareProviders")}</h3>
                    <p>{i18n.t("userTypes.daycare.description")}</p>
                    <button class="btn btn-primary" onclick={to_daycare}>{i18n.t("startFreeTrial")}</button>
                </div>
                <div class="card audience">
                    <h3>{"👪 "}{i18n.t("forFamilies")}</h3>
                    <p>{i18n.t("userTypes.parent.description")}</p>
                    <button class="btn btn-primary" onclick={to_parent}>{i18n.t("joinAsParent")}</button>
                </div>
            </section>

            <footer class="landing-footer">
                {format!("© {} CareConnect Canada. ", crate::services::date_utils::today().format("%Y"))}
                {i18n.t("allRightsReserved")}
            </footer>
        </div>
    }
}
