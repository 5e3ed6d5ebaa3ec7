use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Free,
    Monthly,
    Yearly,
    Lifetime,
    #[serde(other)]
    Other,
}

impl PlanType {
    pub const CHOICES: [PlanType; 4] = [
        PlanType::Free,
        PlanType::Monthly,
        PlanType::Yearly,
        PlanType::Lifetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "free",
            PlanType::Monthly => "monthly",
            PlanType::Yearly => "yearly",
            PlanType::Lifetime => "lifetime",
            PlanType::Other => "other",
        }
    }

    /// Billing period shown under a price
    pub fn period_label(&self) -> &'static str {
        match self {
            PlanType::Free => "for 1 year",
            PlanType::Monthly => "per month",
            PlanType::Yearly => "per year",
            PlanType::Lifetime => "one-time",
            PlanType::Other => "",
        }
    }

    /// i18n key of the plan name
    pub fn label_key(&self) -> &'static str {
        match self {
            PlanType::Free => "plan.free",
            PlanType::Monthly => "plan.monthly",
            PlanType::Yearly => "plan.yearly",
            PlanType::Lifetime => "plan.lifetime",
            PlanType::Other => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    Expired,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Expired => "expired",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Unknown => "unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "badge badge-success",
            SubscriptionStatus::Trial => "badge badge-info",
            SubscriptionStatus::Expired | SubscriptionStatus::Cancelled => "badge badge-danger",
            SubscriptionStatus::Unknown => "badge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
    pub plan_type: PlanType,
    pub price: f64,
    pub currency: String,
    pub duration_months: Option<u32>,
    pub description: String,
    pub features: Vec<String>,
}

impl SubscriptionPlan {
    /// `Free` for zero-priced plans, otherwise `$1,500` style
    pub fn price_label(&self) -> String {
        if self.price <= 0.0 {
            return "Free".to_string();
        }
        let cents = (self.price * 100.0).round() as i64;
        let dollars = group_thousands(cents / 100);
        match cents % 100 {
            0 => format!("${}", dollars),
            rest => format!("${}.{:02}", dollars, rest),
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub id: Option<i64>,
    pub plan_id: Option<i64>,
    pub plan_type: PlanType,
    pub status: SubscriptionStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub trial_end_date: Option<String>,
    pub auto_renew: bool,
}

/// Reads the date part of `2025-01-31` or `2025-01-31T12:00:00Z`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

impl Subscription {
    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    pub fn is_in_trial(&self) -> bool {
        self.status == SubscriptionStatus::Trial
    }

    /// Active or trialing with an end date still ahead; lifetime plans
    /// without an end date never expire
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        if !matches!(self.status, SubscriptionStatus::Active | SubscriptionStatus::Trial) {
            return false;
        }
        match self.end() {
            Some(end) => end > today,
            None => self.plan_type == PlanType::Lifetime,
        }
    }

    /// Whole days left before the end date, never negative
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        self.end()
            .map(|end| (end - today).num_days().max(0))
            .unwrap_or(0)
    }

    pub fn days_until_trial_end(&self, today: NaiveDate) -> i64 {
        if !self.is_in_trial() {
            return 0;
        }
        self.trial_end_date
            .as_deref()
            .and_then(parse_date)
            .map(|end| (end - today).num_days().max(0))
            .unwrap_or_else(|| self.days_until_expiry(today))
    }
}

pub fn has_active_subscription(current: Option<&Subscription>, today: NaiveDate) -> bool {
    current.is_some_and(|s| s.is_active_on(today))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionNotification {
    pub id: Option<i64>,
    pub title: String,
    pub message: String,
    pub notification_type: Option<String>,
    pub is_read: bool,
    pub created_at: Option<String>,
}

pub fn unread_count(notifications: &[SubscriptionNotification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub plan_id: i64,
    pub daycare_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRequest {
    pub new_plan_type: PlanType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_plan_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewRequest {
    pub plan_type: PlanType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendRequest {
    pub months: u32,
}

impl Default for ExtendRequest {
    fn default() -> Self {
        Self { months: 12 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn subscription(status: SubscriptionStatus, end: Option<&str>) -> Subscription {
        Subscription {
            status,
            plan_type: PlanType::Monthly,
            end_date: end.map(str::to_string),
            ..Subscription::default()
        }
    }

    #[test]
    fn test_parse_date_accepts_timestamps() {
        assert_eq!(parse_date("2025-03-01T10:00:00Z"), Some(day("2025-03-01")));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_active_subscription() {
        let today = day("2025-06-15");
        let active = subscription(SubscriptionStatus::Active, Some("2025-07-01"));
        assert!(has_active_subscription(Some(&active), today));

        let ended = subscription(SubscriptionStatus::Active, Some("2025-06-15"));
        assert!(!has_active_subscription(Some(&ended), today));

        let cancelled = subscription(SubscriptionStatus::Cancelled, Some("2026-01-01"));
        assert!(!has_active_subscription(Some(&cancelled), today));

        assert!(!has_active_subscription(None, today));
    }

    #[test]
    fn test_lifetime_without_end_date_is_active() {
        let lifetime = Subscription {
            status: SubscriptionStatus::Active,
            plan_type: PlanType::Lifetime,
            ..Subscription::default()
        };
        assert!(lifetime.is_active_on(day("2030-01-01")));

        let monthly = subscription(SubscriptionStatus::Active, None);
        assert!(!monthly.is_active_on(day("2030-01-01")));
    }

    #[test]
    fn test_days_until_expiry_clamps() {
        let today = day("2025-06-15");
        assert_eq!(subscription(SubscriptionStatus::Active, Some("2025-06-25")).days_until_expiry(today), 10);
        assert_eq!(subscription(SubscriptionStatus::Expired, Some("2025-06-01")).days_until_expiry(today), 0);
        assert_eq!(subscription(SubscriptionStatus::Active, None).days_until_expiry(today), 0);
    }

    #[test]
    fn test_trial_days() {
        let today = day("2025-06-15");
        let mut trial = subscription(SubscriptionStatus::Trial, Some("2025-07-15"));
        assert!(trial.is_in_trial());
        assert_eq!(trial.days_until_trial_end(today), 30);
        trial.trial_end_date = Some("2025-06-20".to_string());
        assert_eq!(trial.days_until_trial_end(today), 5);

        let active = subscription(SubscriptionStatus::Active, Some("2025-07-15"));
        assert_eq!(active.days_until_trial_end(today), 0);
    }

    #[test]
    fn test_unread_count() {
        let notes = vec![
            SubscriptionNotification { is_read: true, ..Default::default() },
            SubscriptionNotification::default(),
            SubscriptionNotification::default(),
        ];
        assert_eq!(unread_count(&notes), 2);
    }

    #[test]
    fn test_price_and_period_labels() {
        let mut plan = SubscriptionPlan {
            plan_type: PlanType::Yearly,
            price: 1500.0,
            ..SubscriptionPlan::default()
        };
        assert_eq!(plan.price_label(), "$1,500");
        assert_eq!(plan.plan_type.period_label(), "per year");
        plan.price = 0.0;
        assert_eq!(plan.price_label(), "Free");
        plan.price = 24.5;
        assert_eq!(plan.price_label(), "$24.50");
        plan.price = 1234567.0;
        assert_eq!(plan.price_label(), "$1,234,567");
    }

    #[test]
    fn test_unknown_status_decodes() {
        let sub: Subscription =
            serde_json::from_str(r#"{"status": "paused", "plan_type": "biennial"}"#).unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Unknown);
        assert_eq!(sub.plan_type, PlanType::Other);
    }

    #[test]
    fn test_request_bodies() {
        let upgrade = serde_json::to_value(UpgradeRequest {
            new_plan_type: PlanType::Lifetime,
            new_plan_id: None,
        })
        .unwrap();
        assert_eq!(upgrade, serde_json::json!({"new_plan_type": "lifetime"}));
        assert_eq!(ExtendRequest::default().months, 12);
    }
}
