use shared::validation::{error_for, summarize, validate_invoice, FieldError};
use shared::{translate, ChildProfile, NewInvoice, INVOICE_TYPES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{humanize, update_with, SelectField, TextArea, TextField};
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_notice, Notice};

#[derive(Clone, PartialEq)]
struct InvoiceDraft {
    child_id: String,
    amount: String,
    due_date: String,
    description: String,
    invoice_type: String,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            child_id: String::new(),
            amount: String::new(),
            due_date: String::new(),
            description: String::new(),
            invoice_type: INVOICE_TYPES[0].to_string(),
        }
    }
}

impl InvoiceDraft {
    /// An unparseable amount becomes zero and fails validation
    fn to_request(&self) -> NewInvoice {
        NewInvoice {
            child_id: self.child_id.parse().ok(),
            amount: self.amount.trim().parse().unwrap_or(0.0),
            due_date: self.due_date.trim().to_string(),
            description: self.description.trim().to_string(),
            invoice_type: self.invoice_type.clone(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InvoiceFormProps {
    pub children: Vec<ChildProfile>,
    pub on_created: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(InvoiceForm)]
pub fn invoice_form(props: &InvoiceFormProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();

    let draft = use_state(InvoiceDraft::default);
    let errors = use_state(Vec::<FieldError>::new);
    let error_message = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let lang = i18n.lang;
    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();
        let api = auth.api();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = draft.to_request();
            let problems = validate_invoice(&request);
            if let Some(summary) = summarize(&problems) {
                error_message.set(Some(summary.user_message(lang)));
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            error_message.set(None);
            submitting.set(true);

            let api = api.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let notify = notify.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match api.create_invoice(&request).await {
                    Ok(()) => {
                        draft.set(InvoiceDraft::default());
                        notify.emit(Notice::success(translate(lang, "payments.invoiceCreated")));
                        on_created.emit(());
                    }
                    Err(e) => error_message.set(Some(e.user_message(lang))),
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let child_options: Vec<(String, String)> = props
        .children
        .iter()
        .filter_map(|child| child.id.map(|id| (id.to_string(), child.full_name())))
        .collect();
    let type_options: Vec<(String, String)> = INVOICE_TYPES
        .iter()
        .map(|kind| (kind.to_string(), humanize(kind)))
        .collect();

    html! {
        <form class="card invoice-form" onsubmit={on_submit}>
            <h2>{"🧾 "}{i18n.t("payments.newInvoice")}</h2>
            {if let Some(error) = (*error_message).clone() {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}

            <div class="form-row">
                <SelectField id="invoice-child" label={i18n.t("incidents.child")}
                    options={child_options} value={draft.child_id.clone()}
                    placeholder={Some(AttrValue::from(i18n.t("incidents.selectChild")))}
                    error={field_error("child_id")}
                    on_change={update_with(&draft, |d: &mut InvoiceDraft, v: String| d.child_id = v)} />
                <SelectField id="invoice-type" label={i18n.t("payments.invoiceType")}
                    options={type_options} value={draft.invoice_type.clone()}
                    on_change={update_with(&draft, |d: &mut InvoiceDraft, v: String| d.invoice_type = v)} />
            </div>
            <div class="form-row">
                <TextField id="invoice-amount" label={i18n.t("payments.amount")} input_type="number" required=true
                    placeholder="0.00" value={draft.amount.clone()} error={field_error("amount")}
                    on_change={update_with(&draft, |d: &mut InvoiceDraft, v: String| d.amount = v)} />
                <TextField id="invoice-due" label={i18n.t("payments.dueDate")} input_type="date" required=true
                    value={draft.due_date.clone()} error={field_error("due_date")}
                    on_change={update_with(&draft, |d: &mut InvoiceDraft, v: String| d.due_date = v)} />
            </div>
            <TextArea id="invoice-description" label={i18n.t("registration.description")}
                value={draft.description.clone()}
                on_change={update_with(&draft, |d: &mut InvoiceDraft, v: String| d.description = v)} />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { i18n.t("common.saving") } else { i18n.t("payments.createInvoice") }}
                </button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*submitting}>
                    {i18n.t("common.cancel")}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draft_parses_amount_and_child() {
        let draft = InvoiceDraft {
            child_id: "12".to_string(),
            amount: " 850.50 ".to_string(),
            due_date: "2025-09-01".to_string(),
            ..InvoiceDraft::default()
        };
        let request = draft.to_request();
        assert_eq!(request.child_id, Some(12));
        assert_eq!(request.amount, 850.5);
        assert_eq!(request.invoice_type, "monthly_fee");

        let bad = InvoiceDraft { amount: "abc".to_string(), ..draft }.to_request();
        assert_eq!(bad.amount, 0.0);
    }
}
