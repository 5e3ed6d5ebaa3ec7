pub mod admin_dashboard;
pub mod daycare_dashboard;
pub mod layout;
pub mod parent_dashboard;
pub mod stat_card;
