use super::{CheckOutcome, CheckReport, SmokeCheck};
use crate::{
    client::PaymentApiClient,
    models::{PaymentRequest, PaymentResponse},
};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// `create-payment`, payload under `request`
    Wrapped,
    /// `create-payment-direct`, bare payload
    Direct,
}

pub struct CreatePaymentCheck {
    route: Route,
    request: PaymentRequest,
}

impl CreatePaymentCheck {
    pub fn new(request: PaymentRequest) -> Self {
        Self { route: Route::Wrapped, request }
    }

    pub fn direct(request: PaymentRequest) -> Self {
        Self { route: Route::Direct, request }
    }
}

impl Default for CreatePaymentCheck {
    fn default() -> Self {
        Self::new(PaymentRequest::sample())
    }
}

#[async_trait]
impl SmokeCheck for CreatePaymentCheck {
    fn title(&self) -> &'static str {
        match self.route {
            Route::Wrapped => "Create Payment",
            Route::Direct => "Create Payment (direct)",
        }
    }

    async fn run(&self, client: &PaymentApiClient) -> CheckReport {
        let mut report = CheckReport::new(self.title());

        let reply = match self.route {
            Route::Wrapped => client.create_payment(&self.request).await,
            Route::Direct => client.create_payment_direct(&self.request).await,
        };
        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => return report.transport_error(&e),
        };

        report.line(format!("Status Code: {}", reply.status.as_u16()));
        report.line(format!("Response: {}", reply.body));

        if !reply.is_ok() {
            report.line(format!(
                "[FAILED] Request failed with status {}",
                reply.status.as_u16()
            ));
            return report.finish(CheckOutcome::failed(format!(
                "unexpected status {}",
                reply.status.as_u16()
            )));
        }

        let data: PaymentResponse = match reply.json() {
            Ok(data) => data,
            Err(e) => {
                report.line(format!("[FAILED] Unexpected response shape: {}", e));
                return report.finish(CheckOutcome::failed("response is not a payment result"));
            }
        };

        if data.success {
            match data.payment_url {
                Some(url) => {
                    report.line(format!("[SUCCESS] Payment URL created: {}", url));
                    report.finish(CheckOutcome::Passed)
                }
                None => {
                    report.line("[FAILED] Payment reported success without a paymentUrl");
                    report.finish(CheckOutcome::failed("missing paymentUrl"))
                }
            }
        } else {
            let message = data.message.unwrap_or_default();
            report.line(format!("[FAILED] Payment creation failed: {}", message));
            report.finish(CheckOutcome::failed(message))
        }
    }
}
