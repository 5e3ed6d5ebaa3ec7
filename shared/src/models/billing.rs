use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    #[serde(other)]
    Other,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Other => "other",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "badge badge-success",
            InvoiceStatus::Pending => "badge badge-warning",
            InvoiceStatus::Overdue => "badge badge-danger",
            InvoiceStatus::Other => "badge badge-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub id: Option<i64>,
    pub invoice_number: String,
    pub child_id: Option<i64>,
    pub child_name: Option<String>,
    pub billing_period_start: Option<String>,
    pub billing_period_end: Option<String>,
    pub total_amount: f64,
    pub balance: f64,
    pub currency: String,
    pub due_date: Option<String>,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn is_payable(&self) -> bool {
        self.status != InvoiceStatus::Paid && self.balance > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub id: Option<i64>,
    pub invoice_id: Option<i64>,
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    pub payment_date: Option<String>,
    pub status: String,
}

/// Body of `POST /api/parent/payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub invoice_id: i64,
    pub amount: f64,
    pub payment_method: String,
}

/// Body of `POST /api/daycare/invoices`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewInvoice {
    pub child_id: Option<i64>,
    pub amount: f64,
    pub due_date: String,
    pub description: String,
    pub invoice_type: String,
}

pub const INVOICE_TYPES: [&str; 6] = [
    "monthly_fee",
    "registration_fee",
    "late_fee",
    "activity_fee",
    "meal_fee",
    "other",
];

pub const PAYMENT_METHODS: [&str; 3] = ["credit_card", "debit", "e_transfer"];

/// Totals shown above the invoice table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillingSummary {
    pub total_billed: f64,
    pub outstanding: f64,
    pub overdue_count: usize,
}

impl BillingSummary {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        invoices.iter().fold(Self::default(), |mut acc, invoice| {
            acc.total_billed += invoice.total_amount;
            if invoice.status != InvoiceStatus::Paid {
                acc.outstanding += invoice.balance;
            }
            if invoice.status == InvoiceStatus::Overdue {
                acc.overdue_count += 1;
            }
            acc
        })
    }
}

/// Format an amount the way Canadian invoices display it
pub fn format_money(amount: f64, currency: &str) -> String {
    let currency = if currency.is_empty() { "CAD" } else { currency };
    format!("${:.2} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(total: f64, balance: f64, status: InvoiceStatus) -> Invoice {
        Invoice {
            total_amount: total,
            balance,
            status,
            ..Invoice::default()
        }
    }

    #[test]
    fn test_billing_summary() {
        let invoices = vec![
            invoice(800.0, 0.0, InvoiceStatus::Paid),
            invoice(800.0, 800.0, InvoiceStatus::Pending),
            invoice(650.0, 300.0, InvoiceStatus::Overdue),
        ];
        let summary = BillingSummary::from_invoices(&invoices);
        assert_eq!(summary.total_billed, 2250.0);
        assert_eq!(summary.outstanding, 1100.0);
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn test_payable() {
        assert!(invoice(10.0, 10.0, InvoiceStatus::Pending).is_payable());
        assert!(!invoice(10.0, 0.0, InvoiceStatus::Paid).is_payable());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12.5, ""), "$12.50 CAD");
        assert_eq!(format_money(3.0, "USD"), "$3.00 USD");
    }
}
