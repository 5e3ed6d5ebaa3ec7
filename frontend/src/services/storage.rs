//! Browser storage for the session, the chosen plan and the UI language.

use gloo::storage::{LocalStorage, SessionStorage, Storage};
use shared::storage_keys::{LANGUAGE, REDIRECT_AFTER_LOGIN, SELECTED_PLAN, TOKEN, USER};
use shared::{Language, Route, SubscriptionPlan, User};

use super::logging::Logger;

/// Stored token and user; the user is `None` when missing or unreadable
pub fn load_credentials() -> (Option<String>, Option<User>) {
    let token = LocalStorage::get::<String>(TOKEN).ok().filter(|t| !t.is_empty());
    let user = match LocalStorage::get::<User>(USER) {
        Ok(user) => Some(user),
        Err(e) => {
            if LocalStorage::raw().get_item(USER).ok().flatten().is_some() {
                Logger::warn_with_component("storage", &format!("discarding stored user: {}", e));
                LocalStorage::delete(USER);
            }
            None
        }
    };
    (token, user)
}

pub fn save_credentials(token: &str, user: &User) {
    if let Err(e) = LocalStorage::set(TOKEN, token) {
        Logger::error_with_component("storage", &format!("failed to store token: {}", e));
    }
    save_user(user);
}

pub fn save_user(user: &User) {
    if let Err(e) = LocalStorage::set(USER, user) {
        Logger::error_with_component("storage", &format!("failed to store user: {}", e));
    }
}

pub fn clear_credentials() {
    LocalStorage::delete(TOKEN);
    LocalStorage::delete(USER);
}

/// Plan picked on the landing page; corrupt entries are removed
pub fn load_selected_plan() -> Option<SubscriptionPlan> {
    let raw = LocalStorage::raw().get_item(SELECTED_PLAN).ok().flatten()?;
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => shared::adapter::decode_lenient(&value),
        Err(e) => {
            Logger::warn_with_component("storage", &format!("discarding saved plan: {}", e));
            LocalStorage::delete(SELECTED_PLAN);
            None
        }
    }
}

pub fn save_selected_plan(plan: Option<&SubscriptionPlan>) {
    match plan {
        Some(plan) => {
            if let Err(e) = LocalStorage::set(SELECTED_PLAN, plan) {
                Logger::error_with_component("storage", &format!("failed to store plan: {}", e));
            }
        }
        None => LocalStorage::delete(SELECTED_PLAN),
    }
}

pub fn load_language() -> Option<Language> {
    LocalStorage::get::<String>(LANGUAGE)
        .ok()
        .and_then(|code| Language::from_code(&code))
}

pub fn save_language(lang: Language) {
    let _ = LocalStorage::set(LANGUAGE, lang.code());
}

pub fn remember_redirect(route: &Route) {
    let _ = SessionStorage::set(REDIRECT_AFTER_LOGIN, route.to_path());
}

/// Route saved before a login redirect, removed once read
pub fn take_redirect() -> Option<Route> {
    let path = SessionStorage::get::<String>(REDIRECT_AFTER_LOGIN).ok()?;
    SessionStorage::delete(REDIRECT_AFTER_LOGIN);
    Some(Route::parse(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PlanType;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_selected_plan_round_trip() {
        let plan = SubscriptionPlan {
            id: 2,
            name: "Monthly".to_string(),
            plan_type: PlanType::Monthly,
            price: 250.0,
            ..SubscriptionPlan::default()
        };
        save_selected_plan(Some(&plan));
        assert_eq!(load_selected_plan(), Some(plan));
        save_selected_plan(None);
        assert_eq!(load_selected_plan(), None);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_plan_is_discarded() {
        let _ = LocalStorage::raw().set_item(SELECTED_PLAN, "{not json");
        assert_eq!(load_selected_plan(), None);
        assert!(LocalStorage::raw().get_item(SELECTED_PLAN).ok().flatten().is_none());
    }

    #[wasm_bindgen_test]
    fn test_redirect_is_taken_once() {
        remember_redirect(&Route::Payments);
        assert_eq!(take_redirect(), Some(Route::Payments));
        assert_eq!(take_redirect(), None);
    }

    #[wasm_bindgen_test]
    fn test_language_persists() {
        save_language(Language::Fr);
        assert_eq!(load_language(), Some(Language::Fr));
        save_language(Language::En);
    }
}
