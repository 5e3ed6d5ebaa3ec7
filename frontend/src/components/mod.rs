pub mod account;
pub mod age_groups;
pub mod app_router;
pub mod auth;
pub mod children;
pub mod dashboard;
pub mod form_fields;
pub mod incidents;
pub mod landing_page;
pub mod language_toggle;
pub mod loading;
pub mod payments;
