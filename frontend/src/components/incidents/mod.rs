pub mod incident_form;
pub mod incident_list;
pub mod incident_management;
