use super::{status_report, CheckReport, SmokeCheck};
use crate::{client::PaymentApiClient, models::VnpCallbackParams};
use async_trait::async_trait;
use reqwest::StatusCode;

pub struct IpnCheck {
    params: VnpCallbackParams,
}

impl IpnCheck {
    pub fn new(params: VnpCallbackParams) -> Self {
        Self { params }
    }
}

impl Default for IpnCheck {
    fn default() -> Self {
        Self::new(VnpCallbackParams::sample())
    }
}

#[async_trait]
impl SmokeCheck for IpnCheck {
    fn title(&self) -> &'static str {
        "IPN Endpoint"
    }

    async fn run(&self, client: &PaymentApiClient) -> CheckReport {
        let reply = client.ipn(&self.params).await;
        status_report(
            CheckReport::new(self.title()),
            reply,
            &[StatusCode::OK],
            "IPN",
        )
    }
}
