pub mod child_profile;
pub mod children_management;
pub mod edit_child_form;
