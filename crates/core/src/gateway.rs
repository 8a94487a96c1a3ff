//! Remote API gateway: the shared request layer all core operations use.
//!
//! A thin wrapper over [`reqwest::Client`] that attaches the bearer
//! credential when a token is supplied, serializes bodies as JSON, and
//! disables intermediate caching so every call reflects current server
//! state. No retries and no client-side timeout: a thin client delegates
//! both to the transport's defaults.

use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use onepay_protocol::{
    AuthResponse, CreateRequestPayload, LoginPayload, PaymentInitPayload, PaymentInitResponse,
    ProjectDetail, ProjectSummary, PurchaseRequest, RegisterPayload, Unit, UnitStatus, User,
};

use crate::error::{ApiError, Result};

/// Typed client for the remote sales service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the given API base URL
    /// (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    /// Parses `base` and creates a client for it.
    pub fn from_base_url(base: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base)?))
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        debug!(target = "onepay", %path, "GET");
        self.execute(self.http.get(self.endpoint(path)), token)
            .await
    }

    async fn post<T, B>(&self, path: &str, body: Option<&B>, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(target = "onepay", %path, "POST");
        let mut request = self.http.post(self.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, token).await
    }

    /// Sends the request and decodes the response.
    ///
    /// Non-success responses fail with the raw body text so callers can
    /// pattern-match the server's message; an empty body falls back to
    /// `HTTP <status>`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T> {
        let mut request = request.header(CACHE_CONTROL, "no-store");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                message
            };
            debug!(target = "onepay", status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /auth/register`
    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthResponse> {
        self.post("/auth/register", Some(payload), None).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse> {
        self.post("/auth/login", Some(payload), None).await
    }

    /// `GET /auth/me` - validates the token and returns the fresh profile.
    pub async fn me(&self, token: &str) -> Result<User> {
        self.get("/auth/me", Some(token)).await
    }

    /// `GET /projects`
    pub async fn projects(&self) -> Result<Vec<ProjectSummary>> {
        self.get("/projects", None).await
    }

    /// `GET /projects/{id}`
    pub async fn project(&self, project_id: i64) -> Result<ProjectDetail> {
        self.get(&format!("/projects/{project_id}"), None).await
    }

    /// `GET /projects/{id}/units`, optionally filtered by status.
    pub async fn project_units(
        &self,
        project_id: i64,
        status: Option<UnitStatus>,
    ) -> Result<Vec<Unit>> {
        let path = match status {
            Some(status) => format!("/projects/{project_id}/units?status={status}"),
            None => format!("/projects/{project_id}/units"),
        };
        self.get(&path, None).await
    }

    /// `POST /requests` (bearer)
    pub async fn create_request(
        &self,
        token: &str,
        payload: &CreateRequestPayload,
    ) -> Result<PurchaseRequest> {
        self.post("/requests", Some(payload), Some(token)).await
    }

    /// `POST /requests/{id}/submit` (bearer)
    pub async fn submit_request(&self, token: &str, request_id: i64) -> Result<PurchaseRequest> {
        self.post::<_, ()>(&format!("/requests/{request_id}/submit"), None, Some(token))
            .await
    }

    /// `GET /requests/my` (bearer)
    pub async fn my_requests(&self, token: &str) -> Result<Vec<PurchaseRequest>> {
        self.get("/requests/my", Some(token)).await
    }

    /// `POST /payments/initiate` (bearer)
    pub async fn initiate_payment(
        &self,
        token: &str,
        payload: &PaymentInitPayload,
    ) -> Result<PaymentInitResponse> {
        self.post("/payments/initiate", Some(payload), Some(token))
            .await
    }
}
