pub mod callback;
pub mod create_payment;
pub mod ipn;
pub mod response_code;

pub use callback::CallbackCheck;
pub use create_payment::CreatePaymentCheck;
pub use ipn::IpnCheck;
pub use response_code::ResponseCodeCheck;

use crate::{client::PaymentApiClient, error::SmokeError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;

/// One endpoint probe. A check never returns an error: whatever happens is
/// folded into the report so the next check still runs.
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    fn title(&self) -> &'static str;

    async fn run(&self, client: &PaymentApiClient) -> CheckReport;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed,
    Failed { reason: String },
    Errored { error: String },
}

impl CheckOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        CheckOutcome::Failed { reason: reason.into() }
    }

    pub fn errored(error: &SmokeError) -> Self {
        CheckOutcome::Errored { error: error.to_string() }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Passed => write!(f, "passed"),
            CheckOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            CheckOutcome::Errored { error } => write!(f, "errored: {}", error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub title: &'static str,
    pub lines: Vec<String>,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
            outcome: CheckOutcome::Passed,
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn finish(mut self, outcome: CheckOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Reports a failure that kept the request from getting a response.
    pub fn transport_error(mut self, error: &SmokeError) -> Self {
        tracing::warn!(check = self.title, "Request error: {}", error);
        self.line(format!("[ERROR] Request error: {}", error));
        self.finish(CheckOutcome::errored(error))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Shared body of the callback and IPN checks: one request, pass when the
/// status is in `accepted`.
pub(crate) fn status_report(
    mut report: CheckReport,
    reply: Result<crate::models::ApiReply, SmokeError>,
    accepted: &[StatusCode],
    url_label: &str,
) -> CheckReport {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => return report.transport_error(&e),
    };

    report.line(format!("Testing {} URL: {}", url_label, reply.url));
    report.line(format!("Status Code: {}", reply.status.as_u16()));
    report.line(format!("Response: {}", reply.body));

    if accepted.contains(&reply.status) {
        report.line(format!("[SUCCESS] {} endpoint responded", url_label));
        report.finish(CheckOutcome::Passed)
    } else {
        report.line(format!(
            "[FAILED] {} failed with status {}",
            url_label,
            reply.status.as_u16()
        ));
        report.finish(CheckOutcome::failed(format!(
            "unexpected status {}",
            reply.status.as_u16()
        )))
    }
}
