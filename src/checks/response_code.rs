use super::{CheckOutcome, CheckReport, SmokeCheck};
use crate::{client::PaymentApiClient, config::DEFAULT_RESPONSE_CODES, models::ResponseCodeMeaning};
use async_trait::async_trait;

/// Looks up every probe code in turn. Codes that are not two digits are
/// expected to be rejected by the service.
pub struct ResponseCodeCheck {
    codes: Vec<String>,
}

impl ResponseCodeCheck {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }
}

impl Default for ResponseCodeCheck {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_CODES.iter().map(|c| c.to_string()).collect())
    }
}

fn is_well_formed(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl SmokeCheck for ResponseCodeCheck {
    fn title(&self) -> &'static str {
        "Response Code Meaning"
    }

    async fn run(&self, client: &PaymentApiClient) -> CheckReport {
        let mut report = CheckReport::new(self.title());
        let mut problems = Vec::new();
        let mut first_error = None;

        for code in &self.codes {
            let reply = match client.response_code(code).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::warn!(code = %code, "Request error: {}", e);
                    report.line(format!("Code {}: [ERROR] Request error: {}", code, e));
                    first_error.get_or_insert(e);
                    continue;
                }
            };

            if !reply.is_ok() {
                report.line(format!(
                    "Code {}: [{}] {}",
                    code,
                    reply.status.as_u16(),
                    reply.body
                ));
                if is_well_formed(code) {
                    problems.push(format!("{} -> status {}", code, reply.status.as_u16()));
                }
                continue;
            }

            match reply.json::<ResponseCodeMeaning>() {
                Ok(ResponseCodeMeaning { meaning: Some(meaning) }) => {
                    report.line(format!("Code {}: {}", code, meaning));
                    if !is_well_formed(code) {
                        problems.push(format!("{} was accepted", code));
                    }
                }
                _ => {
                    report.line(format!("Code {}: [FAILED] no meaning in {}", code, reply.body));
                    problems.push(format!("{} -> missing meaning", code));
                }
            }
        }

        let outcome = match (first_error, problems.is_empty()) {
            (Some(e), _) => CheckOutcome::errored(&e),
            (None, true) => CheckOutcome::Passed,
            (None, false) => CheckOutcome::failed(problems.join(", ")),
        };
        report.finish(outcome)
    }
}
