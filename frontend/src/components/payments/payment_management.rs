use shared::{
    format_money, translate, BillingSummary, ChildFilter, ChildProfile, Invoice, Payment, PaymentRequest,
    PAYMENT_METHODS,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::invoice_form::InvoiceForm;
use crate::components::dashboard::stat_card::StatCard;
use crate::components::form_fields::{humanize, SelectField};
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_error_reporter, use_notice, Notice};
use crate::services::date_utils::display_date;
use crate::services::logging::Logger;

/// Full outstanding balance of the invoice, paid with `method`
fn payment_for(invoice: &Invoice, method: &str) -> Option<PaymentRequest> {
    let invoice_id = invoice.id?;
    invoice.is_payable().then(|| PaymentRequest {
        invoice_id,
        amount: invoice.balance,
        payment_method: method.to_string(),
    })
}

#[derive(Properties, PartialEq)]
struct PayPanelProps {
    invoice: Invoice,
    on_paid: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(PayPanel)]
fn pay_panel(props: &PayPanelProps) -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let report_error = use_error_reporter("payment_management");
    let method = use_state(|| PAYMENT_METHODS[0].to_string());
    let paying = use_state(|| false);

    let on_method = {
        let method = method.clone();
        Callback::from(move |value: String| method.set(value))
    };

    let on_confirm = {
        let api = auth.api();
        let invoice = props.invoice.clone();
        let method = method.clone();
        let paying = paying.clone();
        let on_paid = props.on_paid.clone();
        let lang = i18n.lang;
        Callback::from(move |_: MouseEvent| {
            let Some(request) = payment_for(&invoice, &method) else {
                return;
            };
            paying.set(true);
            let api = api.clone();
            let paying = paying.clone();
            let notify = notify.clone();
            let report_error = report_error.clone();
            let on_paid = on_paid.clone();
            spawn_local(async move {
                match api.pay_invoice(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("payment_management", &format!("paid invoice {}", request.invoice_id));
                        notify.emit(Notice::success(translate(lang, "payments.paymentSuccess")));
                        on_paid.emit(());
                    }
                    Err(e) => report_error.emit(e),
                }
                paying.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let invoice = &props.invoice;
    let method_options: Vec<(String, String)> = PAYMENT_METHODS
        .iter()
        .map(|m| (m.to_string(), humanize(m)))
        .collect();

    html! {
        <div class="card pay-panel">
            <h3>{"💳 "}{i18n.t("payments.pay")}{" "}{&invoice.invoice_number}</h3>
            <p class="amount">{format_money(invoice.balance, &invoice.currency)}</p>
            <SelectField id="payment-method" label={i18n.t("payments.method")}
                options={method_options} value={(*method).clone()} on_change={on_method} />
            <div class="form-actions">
                <button class="btn btn-primary" onclick={on_confirm} disabled={*paying}>
                    {if *paying { i18n.t("common.saving") } else { i18n.t("payments.confirmPayment") }}
                </button>
                <button class="btn btn-secondary" onclick={on_cancel} disabled={*paying}>{i18n.t("common.cancel")}</button>
            </div>
        </div>
    }
}

#[function_component(PaymentManagement)]
pub fn payment_management() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let report_error = use_error_reporter("payment_management");

    let as_daycare = auth.session.is_daycare() || auth.session.is_admin();
    let invoices = use_state(Vec::<Invoice>::new);
    let payments = use_state(Vec::<Payment>::new);
    let children = use_state(Vec::<ChildProfile>::new);
    let loading = use_state(|| true);
    let show_form = use_state(|| false);
    let paying = use_state(|| Option::<Invoice>::None);
    let reload = use_state(|| 0u32);

    {
        let invoices = invoices.clone();
        let payments = payments.clone();
        let children = children.clone();
        let loading = loading.clone();
        use_effect_with((auth.api(), as_daycare, *reload), move |(api, as_daycare, _)| {
            let api = api.clone();
            let as_daycare = *as_daycare;
            spawn_local(async move {
                match api.invoices(as_daycare).await {
                    Ok(list) => invoices.set(list),
                    Err(e) => report_error.emit(e),
                }
                match api.payments(as_daycare).await {
                    Ok(list) => payments.set(list),
                    Err(e) => report_error.emit(e),
                }
                if as_daycare {
                    if let Ok(list) = api.children(ChildFilter::All).await {
                        children.set(list);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let refresh = {
        let reload = reload.clone();
        let show_form = show_form.clone();
        let paying = paying.clone();
        Callback::from(move |_: ()| {
            show_form.set(false);
            paying.set(None);
            reload.set(*reload + 1);
        })
    };

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(false))
    };

    let close_pay = {
        let paying = paying.clone();
        Callback::from(move |_: ()| paying.set(None))
    };

    if *loading {
        return html! { <LoadingRow /> };
    }

    let summary = BillingSummary::from_invoices(&invoices);

    html! {
        <div class="page payment-management">
            <div class="page-header">
                <h1>{"💳 "}{i18n.t("payments.title")}</h1>
                {if as_daycare && !*show_form {
                    html! { <button class="btn btn-primary" onclick={open_form}>{"➕ "}{i18n.t("payments.newInvoice")}</button> }
                } else { html! {} }}
            </div>

            <div class="stat-grid">
                <StatCard icon="🧾" label={i18n.t("payments.totalBilled")} value={format_money(summary.total_billed, "CAD")} />
                <StatCard icon="⏳" label={i18n.t("payments.outstanding")} value={format_money(summary.outstanding, "CAD")} />
                <StatCard icon="🚨" label={i18n.t("payments.overdue")} value={summary.overdue_count.to_string()} />
            </div>

            {if *show_form {
                html! { <InvoiceForm children={(*children).clone()} on_created={refresh.clone()} on_cancel={close_form} /> }
            } else { html! {} }}

            {if let Some(invoice) = (*paying).clone() {
                html! { <PayPanel {invoice} on_paid={refresh.clone()} on_cancel={close_pay} /> }
            } else { html! {} }}

            <section class="card">
                <h2>{i18n.t("payments.invoices")}</h2>
                {if invoices.is_empty() {
                    html! { <p class="empty-state">{i18n.t("payments.empty")}</p> }
                } else {
                    html! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{i18n.t("payments.invoiceNumber")}</th>
                                    <th>{i18n.t("incidents.child")}</th>
                                    <th>{i18n.t("payments.amount")}</th>
                                    <th>{i18n.t("payments.balance")}</th>
                                    <th>{i18n.t("payments.dueDate")}</th>
                                    <th>{i18n.t("status")}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for invoices.iter().map(|invoice| {
                                    let pay = (!as_daycare && invoice.is_payable()).then(|| {
                                        let paying = paying.clone();
                                        let invoice = invoice.clone();
                                        Callback::from(move |_: MouseEvent| paying.set(Some(invoice.clone())))
                                    });
                                    html! {
                                        <tr>
                                            <td>{&invoice.invoice_number}</td>
                                            <td>{invoice.child_name.clone().unwrap_or_default()}</td>
                                            <td>{format_money(invoice.total_amount, &invoice.currency)}</td>
                                            <td>{format_money(invoice.balance, &invoice.currency)}</td>
                                            <td>{display_date(invoice.due_date.as_deref(), i18n.lang)}</td>
                                            <td><span class={invoice.status.badge_class()}>{i18n.t_owned(&format!("invoiceStatus.{}", invoice.status.as_str()))}</span></td>
                                            <td>
                                                {if let Some(onclick) = pay {
                                                    html! { <button class="btn btn-primary btn-small" {onclick}>{i18n.t("payments.pay")}</button> }
                                                } else { html! {} }}
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section class="card">
                <h2>{i18n.t("payments.history")}</h2>
                {if payments.is_empty() {
                    html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
                } else {
                    html! {
                        <ul class="payment-list">
                            {for payments.iter().map(|payment| html! {
                                <li>
                                    <span>{format_money(payment.amount, &payment.currency)}</span>
                                    <span class="muted">{humanize(&payment.payment_method)}</span>
                                    <span class="muted">{display_date(payment.payment_date.as_deref(), i18n.lang)}</span>
                                    <span class="badge badge-muted">{humanize(&payment.status)}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::InvoiceStatus;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_payment_covers_outstanding_balance() {
        let invoice = Invoice {
            id: Some(4),
            total_amount: 900.0,
            balance: 450.0,
            status: InvoiceStatus::Pending,
            ..Invoice::default()
        };
        let request = payment_for(&invoice, "debit").unwrap();
        assert_eq!(request.invoice_id, 4);
        assert_eq!(request.amount, 450.0);
        assert_eq!(request.payment_method, "debit");
    }

    #[wasm_bindgen_test]
    fn test_paid_or_unsaved_invoices_cannot_be_paid() {
        let paid = Invoice { id: Some(1), balance: 0.0, status: InvoiceStatus::Paid, ..Invoice::default() };
        assert!(payment_for(&paid, "debit").is_none());
        let unsaved = Invoice { id: None, balance: 20.0, ..Invoice::default() };
        assert!(payment_for(&unsaved, "debit").is_none());
    }
}
