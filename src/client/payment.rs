use crate::{
    config::Config,
    error::SmokeError,
    models::{ApiReply, PaymentRequest, PaymentRequestEnvelope, VnpCallbackParams},
};
use reqwest::{redirect::Policy, Client, RequestBuilder};
use std::time::Duration;

/// Thin wrapper over the service's `/api/payment` routes. Every method sends
/// exactly one request and hands back whatever the server said.
#[derive(Debug, Clone)]
pub struct PaymentApiClient {
    http: Client,
    api_base: String,
}

impl PaymentApiClient {
    pub fn new(config: &Config) -> Result<Self, SmokeError> {
        // Redirects are not followed: the callback answers 302 and that status
        // is what gets checked.
        let mut builder = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(Policy::none());

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.api_base(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<ApiReply, SmokeError> {
        let envelope = PaymentRequestEnvelope::from(request.clone());
        let url = format!("{}/create-payment", self.api_base);

        tracing::info!(order_id = %request.order_id, "POST {}", url);
        self.send(self.http.post(&url).json(&envelope)).await
    }

    pub async fn create_payment_direct(
        &self,
        request: &PaymentRequest,
    ) -> Result<ApiReply, SmokeError> {
        let url = format!("{}/create-payment-direct", self.api_base);

        tracing::info!(order_id = %request.order_id, "POST {}", url);
        self.send(self.http.post(&url).json(request)).await
    }

    pub async fn callback(&self, params: &VnpCallbackParams) -> Result<ApiReply, SmokeError> {
        let url = format!("{}/callback", self.api_base);

        tracing::info!(txn_ref = %params.txn_ref, "GET {}", url);
        self.send(self.http.get(&url).query(params)).await
    }

    /// The IPN carries its parameters on the query string, not in the body.
    pub async fn ipn(&self, params: &VnpCallbackParams) -> Result<ApiReply, SmokeError> {
        let url = format!("{}/ipn", self.api_base);

        tracing::info!(txn_ref = %params.txn_ref, "POST {}", url);
        self.send(self.http.post(&url).query(params)).await
    }

    pub async fn response_code(&self, code: &str) -> Result<ApiReply, SmokeError> {
        let url = format!("{}/response-code/{}", self.api_base, code);

        tracing::info!("GET {}", url);
        self.send(self.http.get(&url)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiReply, SmokeError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response arrived: {}", e);
            SmokeError::Transport(e)
        })?;

        let url = response.url().to_string();
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, bytes = body.len(), "Response from {}", url);

        Ok(ApiReply { url, status, body })
    }
}
