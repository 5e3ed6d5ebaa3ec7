pub mod invoice_form;
pub mod payment_management;
