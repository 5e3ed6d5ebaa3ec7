pub mod daycare_registration;
pub mod login_form;
pub mod parent_registration;
pub mod user_type_selection;
