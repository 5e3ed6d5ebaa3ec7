use gloo::dialogs::confirm;
use shared::subscription::{CancelRequest, ExtendRequest, RenewRequest, SubscribeRequest, UpgradeRequest};
use shared::{translate, ApiError, PlanType, Subscription, SubscriptionPlan, SubscriptionStatus};
use yew::prelude::*;

use crate::components::form_fields::TextField;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_error_reporter, use_notice, Notice};
use crate::hooks::use_subscription::{use_subscription, SubscriptionChange};
use crate::services::date_utils::display_date;

const PAID_PLANS: [PlanType; 3] = [PlanType::Monthly, PlanType::Yearly, PlanType::Lifetime];

/// Which changes the current subscription allows
#[derive(Debug, Clone, PartialEq, Default)]
struct AvailableChanges {
    renew: Vec<PlanType>,
    upgrade: Vec<PlanType>,
    extend: bool,
    cancel: bool,
}

fn available_changes(subscription: &Subscription) -> AvailableChanges {
    let status = subscription.status;
    let renew = match status {
        SubscriptionStatus::Expired | SubscriptionStatus::Trial | SubscriptionStatus::Cancelled => PAID_PLANS.to_vec(),
        _ => Vec::new(),
    };
    let upgrade = if status == SubscriptionStatus::Active {
        match subscription.plan_type {
            PlanType::Lifetime => Vec::new(),
            PlanType::Yearly => vec![PlanType::Lifetime],
            _ => vec![PlanType::Yearly, PlanType::Lifetime],
        }
    } else {
        Vec::new()
    };
    AvailableChanges {
        renew,
        upgrade,
        extend: status == SubscriptionStatus::Trial,
        cancel: status == SubscriptionStatus::Active,
    }
}

/// Catalog plan of the given type, for its id and price
fn plan_of(plans: &[SubscriptionPlan], plan_type: PlanType) -> Option<&SubscriptionPlan> {
    plans.iter().find(|plan| plan.plan_type == plan_type)
}

#[function_component(SubscriptionPanel)]
pub fn subscription_panel() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let report_error = use_error_reporter("subscription_panel");
    let subscription = use_subscription();
    let cancel_reason = use_state(String::new);

    {
        let refresh = subscription.actions.refresh.clone();
        let load_plans = subscription.actions.load_plans.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            load_plans.emit(());
            || ()
        });
    }

    let lang = i18n.lang;
    let apply = {
        let change = subscription.actions.change.clone();
        let refresh = subscription.actions.refresh.clone();
        Callback::from(move |request: SubscriptionChange| {
            let notify = notify.clone();
            let report_error = report_error.clone();
            let refresh = refresh.clone();
            let done = Callback::from(move |result: Result<Subscription, ApiError>| match result {
                Ok(_) => {
                    notify.emit(Notice::success(translate(lang, "subscription.updated")));
                    refresh.emit(());
                }
                Err(e) => report_error.emit(e),
            });
            change.emit((request, done));
        })
    };

    let state = &subscription.state;
    let plans = &state.plans;
    let plan_label = |plan_type: PlanType| {
        let price = plan_of(plans, plan_type).map(SubscriptionPlan::price_label).unwrap_or_default();
        format!("{} {}", i18n.t(plan_type.label_key()), price).trim().to_string()
    };

    let body = match state.current.as_ref() {
        None if state.loading => html! { <LoadingRow /> },
        None => {
            let daycare_id = auth.session.user.as_ref().and_then(|user| user.daycare_id);
            html! {
                <div class="subscription-empty">
                    <p class="empty-state">{i18n.t("subscription.none")}</p>
                    <div class="plan-buttons">
                        {for plans.iter().map(|plan| {
                            let apply = apply.clone();
                            let plan_id = plan.id;
                            let onclick = Callback::from(move |_: MouseEvent| {
                                apply.emit(SubscriptionChange::Subscribe(SubscribeRequest { plan_id, daycare_id }))
                            });
                            html! {
                                <button class="btn btn-outline" {onclick}>
                                    {i18n.t("choosePlan")}{": "}{&plan.name}{" · "}{plan.price_label()}
                                </button>
                            }
                        })}
                    </div>
                </div>
            }
        }
        Some(current) => {
            let changes = available_changes(current);
            let renew_buttons = changes.renew.iter().map(|plan_type| {
                let apply = apply.clone();
                let plan_type = *plan_type;
                let onclick = Callback::from(move |_: MouseEvent| {
                    apply.emit(SubscriptionChange::Renew(RenewRequest { plan_type }))
                });
                html! { <button class="btn btn-primary" {onclick}>{i18n.t("subscription.renew")}{" · "}{plan_label(plan_type)}</button> }
            }).collect::<Html>();
            let upgrade_buttons = changes.upgrade.iter().map(|plan_type| {
                let apply = apply.clone();
                let plan_type = *plan_type;
                let new_plan_id = plan_of(plans, plan_type).map(|plan| plan.id);
                let onclick = Callback::from(move |_: MouseEvent| {
                    apply.emit(SubscriptionChange::Upgrade(UpgradeRequest { new_plan_type: plan_type, new_plan_id }))
                });
                html! { <button class="btn btn-secondary" {onclick}>{i18n.t("subscription.upgrade")}{" · "}{plan_label(plan_type)}</button> }
            }).collect::<Html>();

            let on_extend = {
                let apply = apply.clone();
                Callback::from(move |_: MouseEvent| apply.emit(SubscriptionChange::Extend(ExtendRequest::default())))
            };
            let on_cancel = {
                let apply = apply.clone();
                let cancel_reason = cancel_reason.clone();
                Callback::from(move |_: MouseEvent| {
                    if !confirm(translate(lang, "subscription.confirmCancel")) {
                        return;
                    }
                    let reason = cancel_reason.trim().to_string();
                    let reason = if reason.is_empty() { "User requested cancellation".to_string() } else { reason };
                    apply.emit(SubscriptionChange::Cancel(CancelRequest { reason }));
                })
            };
            let on_reason = {
                let cancel_reason = cancel_reason.clone();
                Callback::from(move |value: String| cancel_reason.set(value))
            };

            html! {
                <>
                    <dl class="details">
                        <dt>{i18n.t("subscription.plan")}</dt>
                        <dd>{i18n.t(current.plan_type.label_key())}</dd>
                        <dt>{i18n.t("subscription.status")}</dt>
                        <dd><span class={current.status.badge_class()}>{i18n.t_owned(&format!("subscription.statuses.{}", current.status.as_str()))}</span></dd>
                        <dt>{i18n.t("subscription.started")}</dt>
                        <dd>{display_date(current.start_date.as_deref(), lang)}</dd>
                        <dt>{i18n.t("subscription.expires")}</dt>
                        <dd>
                            {if current.plan_type == PlanType::Lifetime && current.end_date.is_none() {
                                html! { {"∞"} }
                            } else {
                                html! {
                                    <>
                                        {display_date(current.end_date.as_deref(), lang)}
                                        <span class="muted">{format!(" ({} {})", state.days_until_expiry(), i18n.t("subscription.daysLeft"))}</span>
                                    </>
                                }
                            }}
                        </dd>
                        {if state.is_in_trial() {
                            html! {
                                <>
                                    <dt>{i18n.t("subscription.trialEnds")}</dt>
                                    <dd>{display_date(current.trial_end_date.as_deref().or(current.end_date.as_deref()), lang)}
                                        <span class="muted">{format!(" ({} {})", state.days_until_trial_end(), i18n.t("subscription.trialDaysLeft"))}</span></dd>
                                </>
                            }
                        } else { html! {} }}
                    </dl>

                    <div class="subscription-actions">
                        {if changes.renew.is_empty() { html! {} } else {
                            html! { <div class="action-group">{renew_buttons}</div> }
                        }}
                        {if changes.upgrade.is_empty() { html! {} } else {
                            html! { <div class="action-group">{upgrade_buttons}</div> }
                        }}
                        {if changes.extend {
                            html! { <button class="btn btn-outline" onclick={on_extend}>{i18n.t("subscription.extend")}</button> }
                        } else { html! {} }}
                        {if changes.cancel {
                            html! {
                                <div class="action-group cancel-group">
                                    <TextField id="cancel-reason" label={i18n.t("subscription.cancelReason")}
                                        value={(*cancel_reason).clone()} on_change={on_reason} />
                                    <button class="btn btn-danger" onclick={on_cancel}>{i18n.t("subscription.cancel")}</button>
                                </div>
                            }
                        } else { html! {} }}
                    </div>
                </>
            }
        }
    };

    html! {
        <section class="card subscription-panel">
            <h2>{"👑 "}{i18n.t("subscription.title")}</h2>
            {body}

            <h3>{"🔔 "}{i18n.t("subscription.notifications")}</h3>
            {if state.notifications.is_empty() {
                html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
            } else {
                html! {
                    <ul class="notification-list">
                        {for state.notifications.iter().map(|note| html! {
                            <li class={classes!("notification", (!note.is_read).then_some("unread"))}>
                                <strong>{&note.title}</strong>
                                <p>{&note.message}</p>
                                <span class="muted">{display_date(note.created_at.as_deref(), lang)}</span>
                            </li>
                        })}
                    </ul>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn subscription(status: SubscriptionStatus, plan_type: PlanType) -> Subscription {
        Subscription { status, plan_type, ..Subscription::default() }
    }

    #[wasm_bindgen_test]
    fn test_trial_can_renew_or_extend() {
        let changes = available_changes(&subscription(SubscriptionStatus::Trial, PlanType::Free));
        assert_eq!(changes.renew, PAID_PLANS.to_vec());
        assert!(changes.extend);
        assert!(!changes.cancel);
        assert!(changes.upgrade.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_active_monthly_upgrades_and_cancels() {
        let changes = available_changes(&subscription(SubscriptionStatus::Active, PlanType::Monthly));
        assert_eq!(changes.upgrade, vec![PlanType::Yearly, PlanType::Lifetime]);
        assert!(changes.cancel);
        assert!(changes.renew.is_empty());

        let lifetime = available_changes(&subscription(SubscriptionStatus::Active, PlanType::Lifetime));
        assert!(lifetime.upgrade.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_plan_lookup_by_type() {
        let plans = vec![
            SubscriptionPlan { id: 2, plan_type: PlanType::Monthly, ..SubscriptionPlan::default() },
            SubscriptionPlan { id: 3, plan_type: PlanType::Yearly, ..SubscriptionPlan::default() },
        ];
        assert_eq!(plan_of(&plans, PlanType::Yearly).map(|p| p.id), Some(3));
        assert!(plan_of(&plans, PlanType::Lifetime).is_none());
    }
}
