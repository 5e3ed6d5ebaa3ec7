use shared::subscription::{
    CancelRequest, ExtendRequest, RenewRequest, SubscribeRequest, UpgradeRequest,
};
use shared::{has_active_subscription, unread_count, Subscription, SubscriptionNotification, SubscriptionPlan};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_auth::{use_auth, Done};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::storage;

#[derive(Clone, PartialEq, Default)]
pub struct SubscriptionState {
    pub selected_plan: Option<SubscriptionPlan>,
    pub plans: Vec<SubscriptionPlan>,
    pub current: Option<Subscription>,
    pub notifications: Vec<SubscriptionNotification>,
    pub loading: bool,
}

impl SubscriptionState {
    pub fn has_active_subscription(&self) -> bool {
        has_active_subscription(self.current.as_ref(), today())
    }

    pub fn is_in_trial(&self) -> bool {
        self.current.as_ref().is_some_and(Subscription::is_in_trial)
    }

    pub fn days_until_expiry(&self) -> i64 {
        self.current.as_ref().map(|s| s.days_until_expiry(today())).unwrap_or(0)
    }

    pub fn days_until_trial_end(&self) -> i64 {
        self.current.as_ref().map(|s| s.days_until_trial_end(today())).unwrap_or(0)
    }

    pub fn unread_notifications(&self) -> usize {
        unread_count(&self.notifications)
    }
}

/// A change to the current subscription
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionChange {
    Subscribe(SubscribeRequest),
    Renew(RenewRequest),
    Extend(ExtendRequest),
    Cancel(CancelRequest),
    Upgrade(UpgradeRequest),
}

#[derive(Clone, PartialEq)]
pub struct SubscriptionActions {
    /// `None` clears the stored choice
    pub select_plan: Callback<Option<SubscriptionPlan>>,
    pub load_plans: Callback<()>,
    /// Reloads the current subscription and its notifications
    pub refresh: Callback<()>,
    pub change: Callback<(SubscriptionChange, Done<Subscription>)>,
}

#[derive(Clone, PartialEq)]
pub struct SubscriptionContext {
    pub state: SubscriptionState,
    pub actions: SubscriptionActions,
}

#[derive(Properties, PartialEq)]
pub struct SubscriptionProviderProps {
    pub children: Html,
}

#[function_component(SubscriptionProvider)]
pub fn subscription_provider(props: &SubscriptionProviderProps) -> Html {
    let auth = use_auth();
    let selected_plan = use_state(storage::load_selected_plan);
    let plans = use_state(Vec::<SubscriptionPlan>::new);
    let current = use_state(|| Option::<Subscription>::None);
    let notifications = use_state(Vec::<SubscriptionNotification>::new);
    let loading = use_state(|| false);

    let select_plan = {
        let selected_plan = selected_plan.clone();
        use_callback((), move |plan: Option<SubscriptionPlan>, _| {
            storage::save_selected_plan(plan.as_ref());
            selected_plan.set(plan);
        })
    };

    let load_plans = {
        let plans = plans.clone();
        let loading = loading.clone();
        use_callback((), move |_: (), _| {
            let plans = plans.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                match ApiClient::new().plans().await {
                    Ok(list) => plans.set(list),
                    Err(e) => {
                        Logger::error_with_component("subscription", &format!("failed to load plans: {}", e));
                        plans.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        })
    };

    let refresh = {
        let current = current.clone();
        let notifications = notifications.clone();
        let api = auth.api();
        let signed_in = auth.session.is_authenticated();
        use_callback((api, signed_in), move |_: (), (api, signed_in)| {
            if !*signed_in {
                current.set(None);
                notifications.set(Vec::new());
                return;
            }
            let api = api.clone();
            let current = current.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match api.current_subscription().await {
                    Ok(subscription) => current.set(subscription),
                    Err(e) => Logger::warn_with_component("subscription", &format!("no current subscription: {}", e)),
                }
                match api.notifications().await {
                    Ok(list) => notifications.set(list),
                    Err(e) => Logger::warn_with_component("subscription", &format!("failed to load notifications: {}", e)),
                }
            });
        })
    };

    let change = {
        let current = current.clone();
        let select_plan = select_plan.clone();
        let api = auth.api();
        use_callback(api, move |(change, done): (SubscriptionChange, Done<Subscription>), api| {
            let api = api.clone();
            let current = current.clone();
            let select_plan = select_plan.clone();
            spawn_local(async move {
                let subscribing = matches!(change, SubscriptionChange::Subscribe(_));
                let result = match &change {
                    SubscriptionChange::Subscribe(request) => api.subscribe(request).await,
                    SubscriptionChange::Renew(request) => api.renew(request).await,
                    SubscriptionChange::Extend(request) => api.extend(request).await,
                    SubscriptionChange::Cancel(request) => api.cancel(request).await,
                    SubscriptionChange::Upgrade(request) => api.upgrade(request).await,
                };
                if let Ok(subscription) = &result {
                    Logger::info_with_component("subscription", &format!("subscription now {}", subscription.status.as_str()));
                    current.set(Some(subscription.clone()));
                    if subscribing {
                        select_plan.emit(None);
                    }
                }
                done.emit(result);
            });
        })
    };

    // Follow the signed-in account
    {
        let refresh = refresh.clone();
        let account = (auth.session.token.clone(), auth.session.is_authenticated());
        use_effect_with(account, move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = SubscriptionContext {
        state: SubscriptionState {
            selected_plan: (*selected_plan).clone(),
            plans: (*plans).clone(),
            current: (*current).clone(),
            notifications: (*notifications).clone(),
            loading: *loading,
        },
        actions: SubscriptionActions {
            select_plan,
            load_plans,
            refresh,
            change,
        },
    };

    html! {
        <ContextProvider<SubscriptionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SubscriptionContext>>
    }
}

#[hook]
pub fn use_subscription() -> SubscriptionContext {
    use_context::<SubscriptionContext>().unwrap_or_else(|| SubscriptionContext {
        state: SubscriptionState::default(),
        actions: SubscriptionActions {
            select_plan: Callback::noop(),
            load_plans: Callback::noop(),
            refresh: Callback::noop(),
            change: Callback::noop(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PlanType, SubscriptionStatus};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_empty_state_helpers() {
        let state = SubscriptionState::default();
        assert!(!state.has_active_subscription());
        assert!(!state.is_in_trial());
        assert_eq!(state.days_until_expiry(), 0);
        assert_eq!(state.unread_notifications(), 0);
    }

    #[wasm_bindgen_test]
    fn test_lifetime_state_is_active() {
        let state = SubscriptionState {
            current: Some(Subscription {
                plan_type: PlanType::Lifetime,
                status: SubscriptionStatus::Active,
                ..Subscription::default()
            }),
            ..SubscriptionState::default()
        };
        assert!(state.has_active_subscription());
    }
}
