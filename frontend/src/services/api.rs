use gloo::net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use shared::adapter::{decode_lenient, decode_list, normalize_child, normalize_children, normalize_parent_dashboard};
use shared::session::bearer;
use shared::subscription::{CancelRequest, ExtendRequest, RenewRequest, SubscribeRequest, UpgradeRequest};
use shared::{
    AgeGroup, AgeGroupDraft, ApiError, AuthResponse, ChildFilter, ChildPayload, ChildProfile,
    DaycareStats, DaycareSummary, Incident, IncidentStatus, IncidentStatusUpdate, Invitation,
    Invoice, LoginRequest, NewIncident, NewInvoice, ParentDashboard, PasswordChange, Payment,
    PaymentRequest, ProfileUpdate, RegistrationRequest, Staff, Subscription,
    SubscriptionNotification, SubscriptionPlan, User,
};

use super::config::AppConfig;
use super::logging::Logger;

fn network_error(e: gloo::net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// REST client for the CareConnect backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for the configured backend, without credentials
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::load().api_url)
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    /// Same backend, sending `Authorization: Bearer <token>`
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    /// Reads the body and maps failures (including `success: false`) to `ApiError`
    async fn read(path: &str, response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let text = response.text().await.map_err(network_error)?;
        let body = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(body) => Some(body),
                Err(e) if ok => return Err(ApiError::Decode(e.to_string())),
                Err(_) => None,
            }
        };

        let rejected = body
            .as_ref()
            .and_then(|b| b.get("success"))
            .and_then(Value::as_bool)
            == Some(false);
        if ok && !rejected {
            return Ok(body.unwrap_or(Value::Null));
        }

        let error = ApiError::from_response(status, body.as_ref());
        Logger::warn_with_component("api", &format!("{} failed ({}): {}", path, status, error));
        Err(error)
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        Self::read(path, response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        Self::read(path, response).await
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(network_error)?;
        Self::read(path, response).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send_json(Request::post(&self.url(path)), path, body).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send_json(Request::put(&self.url(path)), path, body).await
    }

    /// A single record, either bare or wrapped as `{ <key>: {...} }`
    fn record<T: serde::de::DeserializeOwned>(raw: &Value, key: &str) -> Result<T, ApiError> {
        let inner = raw.get(key).filter(|v| v.is_object()).unwrap_or(raw);
        decode_lenient(inner).ok_or_else(|| ApiError::Decode(format!("unexpected {} payload", key)))
    }

    // --- Auth -------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let raw = self.post("/api/auth/login", request).await?;
        Self::record(&raw, "data")
    }

    /// Plain registration, or invitation-based when the request carries a token
    pub async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        let path = if request.invitation_token.is_some() {
            "/api/auth/register-with-invitation"
        } else {
            "/api/auth/register"
        };
        let raw = self.post(path, request).await?;
        Self::record(&raw, "data")
    }

    /// Current user for the stored token
    pub async fn validate(&self) -> Result<User, ApiError> {
        let raw = self.get("/api/auth/validate").await?;
        Self::record(&raw, "user")
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let raw = self.put("/api/auth/update-profile", update).await?;
        Self::record(&raw, "user")
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.put("/api/auth/change-password", change).await.map(|_| ())
    }

    pub async fn invitation(&self, token: &str) -> Result<Invitation, ApiError> {
        let raw = self.get(&format!("/api/public/invitation/{}", urlencoding::encode(token))).await?;
        Self::record(&raw, "invitation")
    }

    // --- Daycare ----------------------------------------------------------

    pub async fn children(&self, filter: ChildFilter) -> Result<Vec<ChildProfile>, ApiError> {
        let raw = self.get(&format!("/api/daycare/children{}", filter.query())).await?;
        Ok(normalize_children(&raw))
    }

    /// Full child detail, run through the shape adapter
    pub async fn child(&self, id: i64) -> Result<ChildProfile, ApiError> {
        let raw = self.get(&format!("/api/daycare/children/{}/full", id)).await?;
        Ok(normalize_child(&raw))
    }

    pub async fn create_child(&self, payload: &ChildPayload) -> Result<ChildProfile, ApiError> {
        let raw = self.post("/api/daycare/children", payload).await?;
        Ok(normalize_child(&raw))
    }

    pub async fn update_child(&self, id: i64, payload: &ChildPayload) -> Result<ChildProfile, ApiError> {
        let raw = self.put(&format!("/api/daycare/children/{}", id), payload).await?;
        Ok(normalize_child(&raw))
    }

    pub async fn delete_child(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/daycare/children/{}", id)).await.map(|_| ())
    }

    pub async fn child_stats(&self) -> Result<DaycareStats, ApiError> {
        let raw = self.get("/api/daycare/children/stats").await?;
        Self::record(&raw, "stats")
    }

    pub async fn staff(&self) -> Result<Vec<Staff>, ApiError> {
        let raw = self.get("/api/daycare/staff").await?;
        Ok(decode_list(&raw, "staff"))
    }

    pub async fn age_groups(&self) -> Result<Vec<AgeGroup>, ApiError> {
        let raw = self.get("/api/daycare/age-groups").await?;
        Ok(decode_list(&raw, "age_groups"))
    }

    pub async fn save_age_group(&self, draft: &AgeGroupDraft) -> Result<(), ApiError> {
        let saved = match draft.id {
            Some(id) => self.put(&format!("/api/daycare/age-groups/{}", id), draft).await,
            None => self.post("/api/daycare/age-groups", draft).await,
        };
        saved.map(|_| ())
    }

    pub async fn delete_age_group(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/daycare/age-groups/{}", id)).await.map(|_| ())
    }

    // --- Incidents ----------------------------------------------------------

    /// Daycare users see every incident, parents only their children's
    pub async fn incidents(&self, as_daycare: bool) -> Result<Vec<Incident>, ApiError> {
        let path = if as_daycare { "/api/daycare/incidents" } else { "/api/parent/incidents" };
        let raw = self.get(path).await?;
        Ok(decode_list(&raw, "incidents"))
    }

    pub async fn create_incident(&self, incident: &NewIncident) -> Result<(), ApiError> {
        self.post("/api/daycare/incidents", incident).await.map(|_| ())
    }

    pub async fn set_incident_status(&self, id: i64, status: IncidentStatus) -> Result<(), ApiError> {
        self.put(&format!("/api/daycare/incidents/{}", id), &IncidentStatusUpdate { status })
            .await
            .map(|_| ())
    }

    // --- Billing ------------------------------------------------------------

    pub async fn invoices(&self, as_daycare: bool) -> Result<Vec<Invoice>, ApiError> {
        let path = if as_daycare { "/api/daycare/invoices" } else { "/api/parent/invoices" };
        let raw = self.get(path).await?;
        Ok(decode_list(&raw, "invoices"))
    }

    pub async fn create_invoice(&self, invoice: &NewInvoice) -> Result<(), ApiError> {
        self.post("/api/daycare/invoices", invoice).await.map(|_| ())
    }

    pub async fn payments(&self, as_daycare: bool) -> Result<Vec<Payment>, ApiError> {
        let path = if as_daycare { "/api/daycare/payments" } else { "/api/parent/payments" };
        let raw = self.get(path).await?;
        Ok(decode_list(&raw, "payments"))
    }

    pub async fn pay_invoice(&self, payment: &PaymentRequest) -> Result<(), ApiError> {
        self.post("/api/parent/payments", payment).await.map(|_| ())
    }

    pub async fn parent_dashboard(&self) -> Result<ParentDashboard, ApiError> {
        let raw = self.get("/api/parent/dashboard").await?;
        Ok(normalize_parent_dashboard(&raw))
    }

    // --- Subscriptions ------------------------------------------------------

    pub async fn plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        let raw = self.get("/api/subscriptions/plans").await?;
        Ok(decode_list(&raw, "plans"))
    }

    /// `None` when the account has no subscription yet
    pub async fn current_subscription(&self) -> Result<Option<Subscription>, ApiError> {
        let raw = match self.get("/api/subscriptions/current").await {
            Err(ApiError::NotFound) => return Ok(None),
            other => other?,
        };
        let inner = raw.get("subscription").unwrap_or(&raw);
        Ok(if inner.is_object() { decode_lenient(inner) } else { None })
    }

    async fn subscription_action<B: Serialize>(&self, path: &str, body: &B, put: bool) -> Result<Subscription, ApiError> {
        let raw = if put { self.put(path, body).await? } else { self.post(path, body).await? };
        Self::record(&raw, "subscription")
    }

    pub async fn subscribe(&self, request: &SubscribeRequest) -> Result<Subscription, ApiError> {
        self.subscription_action("/api/subscriptions/subscribe", request, false).await
    }

    pub async fn renew(&self, request: &RenewRequest) -> Result<Subscription, ApiError> {
        self.subscription_action("/api/subscriptions/renew", request, false).await
    }

    pub async fn extend(&self, request: &ExtendRequest) -> Result<Subscription, ApiError> {
        self.subscription_action("/api/subscriptions/extend", request, false).await
    }

    pub async fn cancel(&self, request: &CancelRequest) -> Result<Subscription, ApiError> {
        self.subscription_action("/api/subscriptions/cancel", request, true).await
    }

    pub async fn upgrade(&self, request: &UpgradeRequest) -> Result<Subscription, ApiError> {
        self.subscription_action("/api/subscriptions/upgrade", request, false).await
    }

    pub async fn notifications(&self) -> Result<Vec<SubscriptionNotification>, ApiError> {
        let raw = self.get("/api/subscriptions/notifications").await?;
        Ok(decode_list(&raw, "notifications"))
    }

    // --- Admin --------------------------------------------------------------

    pub async fn admin_daycares(&self) -> Result<Vec<DaycareSummary>, ApiError> {
        let raw = self.get("/api/admin/daycares").await?;
        Ok(decode_list(&raw, "daycares"))
    }

    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        let raw = self.get("/api/admin/users").await?;
        Ok(decode_list(&raw, "users"))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
