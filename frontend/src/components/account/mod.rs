pub mod manage_account;
pub mod subscription_panel;
