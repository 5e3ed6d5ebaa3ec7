//! Target-independent core of the CareConnect client: wire types, the
//! response-shape adapter, session and subscription state, routing rules,
//! validation and the bilingual string tables.

pub mod adapter;
pub mod error;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod session;
pub mod subscription;
pub mod validation;

pub use error::{ApiError, ErrorCode};
pub use i18n::{translate, Language};
pub use models::*;
pub use routes::{guard, Guard, Route};
pub use session::{Session, SessionAction, SessionPhase};
pub use subscription::{
    has_active_subscription, unread_count, PlanType, Subscription, SubscriptionNotification,
    SubscriptionPlan, SubscriptionStatus,
};

/// Local storage keys shared by the client
pub mod storage_keys {
    pub const TOKEN: &str = "careconnect_token";
    pub const USER: &str = "careconnect_user";
    pub const SELECTED_PLAN: &str = "careconnect_selected_plan";
    pub const LANGUAGE: &str = "careconnect_language";
    /// Session storage; route to resume after logging in
    pub const REDIRECT_AFTER_LOGIN: &str = "redirectAfterLogin";
}
