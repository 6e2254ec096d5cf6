use crate::{
    checks::{
        CallbackCheck, CheckOutcome, CheckReport, CreatePaymentCheck, IpnCheck, ResponseCodeCheck,
        SmokeCheck,
    },
    client::PaymentApiClient,
    config::Config,
    error::SmokeError,
    models::PaymentRequest,
};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub reports: Vec<CheckReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, CheckOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CheckOutcome::Failed { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, CheckOutcome::Errored { .. }))
    }

    fn count(&self, pred: impl Fn(&CheckOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

pub struct SmokeRunner {
    client: PaymentApiClient,
    checks: Vec<Box<dyn SmokeCheck>>,
}

impl SmokeRunner {
    pub fn new(client: PaymentApiClient) -> Self {
        Self {
            client,
            checks: Vec::new(),
        }
    }

    /// The standard sequence: create-payment, optionally create-payment-direct,
    /// callback, IPN, response-code lookups.
    pub fn from_config(config: &Config) -> Result<Self, SmokeError> {
        let client = PaymentApiClient::new(config)?;

        let mut runner = Self::new(client).with_check(CreatePaymentCheck::default());
        if config.direct_check {
            runner = runner.with_check(CreatePaymentCheck::direct(PaymentRequest::sample()));
        }

        Ok(runner
            .with_check(CallbackCheck::default())
            .with_check(IpnCheck::default())
            .with_check(ResponseCodeCheck::new(config.response_codes.clone())))
    }

    pub fn with_check(mut self, check: impl SmokeCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.title()).collect()
    }

    /// Runs every check in order, writing each report as soon as it is in.
    /// Only a failing writer stops the run.
    pub async fn run<W: Write>(&self, out: &mut W) -> std::io::Result<RunSummary> {
        let started_at = Utc::now();
        let clock = Instant::now();

        writeln!(out, "VNPay Integration Test")?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "Target: {}", self.client.api_base())?;

        let mut reports = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            writeln!(out)?;
            writeln!(out, "=== Testing {} ===", check.title())?;
            out.flush()?;

            let report = check.run(&self.client).await;
            for line in &report.lines {
                writeln!(out, "{}", line)?;
            }

            if report.outcome.is_passed() {
                tracing::info!(check = report.title, "Check passed");
            } else {
                tracing::warn!(check = report.title, outcome = %report.outcome, "Check did not pass");
            }
            reports.push(report);
        }

        let summary = RunSummary {
            started_at,
            elapsed: clock.elapsed(),
            reports,
        };

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "Summary: {} passed, {} failed, {} errored ({} ms, started {})",
            summary.passed(),
            summary.failed(),
            summary.errored(),
            summary.elapsed.as_millis(),
            summary.started_at.to_rfc3339(),
        )?;
        writeln!(out, "Test completed!")?;
        out.flush()?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(&'static str, CheckOutcome);

    #[async_trait]
    impl SmokeCheck for Fixed {
        fn title(&self) -> &'static str {
            self.0
        }

        async fn run(&self, _client: &PaymentApiClient) -> CheckReport {
            let mut report = CheckReport::new(self.0);
            report.line(format!("{} ran", self.0));
            report.finish(self.1.clone())
        }
    }

    #[test]
    fn standard_sequence_order() {
        let runner = SmokeRunner::from_config(&Config::default()).unwrap();
        assert_eq!(
            runner.titles(),
            vec!["Create Payment", "Callback Endpoint", "IPN Endpoint", "Response Code Meaning"]
        );

        let config = Config {
            direct_check: true,
            ..Config::default()
        };
        let runner = SmokeRunner::from_config(&config).unwrap();
        assert_eq!(runner.titles()[1], "Create Payment (direct)");
        assert_eq!(runner.titles().len(), 5);
    }

    #[tokio::test]
    async fn prints_every_report_and_tallies() {
        let client = PaymentApiClient::new(&Config::default()).unwrap();
        let runner = SmokeRunner::new(client)
            .with_check(Fixed("One", CheckOutcome::Passed))
            .with_check(Fixed("Two", CheckOutcome::failed("nope")))
            .with_check(Fixed("Three", CheckOutcome::Errored { error: "refused".into() }));

        let mut out = Vec::new();
        let summary = runner.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!((summary.passed(), summary.failed(), summary.errored()), (1, 1, 1));
        assert!(text.starts_with("VNPay Integration Test\n"));
        assert!(text.contains("=== Testing Two ===\nTwo ran\n"));
        assert!(text.contains("Summary: 1 passed, 1 failed, 1 errored"));
        assert!(text.ends_with("Test completed!\n"));
    }
}
