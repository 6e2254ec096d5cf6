use super::{status_report, CheckReport, SmokeCheck};
use crate::{client::PaymentApiClient, models::VnpCallbackParams};
use async_trait::async_trait;
use reqwest::StatusCode;

/// The browser-facing return URL. The service redirects to the storefront,
/// so 302 counts as a good answer.
pub struct CallbackCheck {
    params: VnpCallbackParams,
}

impl CallbackCheck {
    pub fn new(params: VnpCallbackParams) -> Self {
        Self { params }
    }
}

impl Default for CallbackCheck {
    fn default() -> Self {
        Self::new(VnpCallbackParams::sample())
    }
}

#[async_trait]
impl SmokeCheck for CallbackCheck {
    fn title(&self) -> &'static str {
        "Callback Endpoint"
    }

    async fn run(&self, client: &PaymentApiClient) -> CheckReport {
        let reply = client.callback(&self.params).await;
        status_report(
            CheckReport::new(self.title()),
            reply,
            &[StatusCode::OK, StatusCode::FOUND],
            "Callback",
        )
    }
}
