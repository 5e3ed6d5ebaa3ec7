pub mod use_auth;
pub mod use_children;
pub mod use_daycare_stats;
pub mod use_language;
pub mod use_notice;
pub mod use_route;
pub mod use_subscription;
