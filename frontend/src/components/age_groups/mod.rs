pub mod manage_age_groups;
