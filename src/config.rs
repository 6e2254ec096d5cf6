use anyhow::{bail, Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://localhost:7040";

/// Probe set for the response-code check. `invalid` is deliberately malformed.
pub const DEFAULT_RESPONSE_CODES: &[&str] = &[
    "00", "01", "02", "04", "05", "06", "07", "09", "13", "65", "75", "79", "99", "invalid",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,

    // TLS validation is off by default so a local dev certificate is accepted
    pub accept_invalid_certs: bool,
    pub request_timeout_secs: Option<u64>,

    pub response_codes: Vec<String>,
    pub direct_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: true,
            request_timeout_secs: None,
            response_codes: DEFAULT_RESPONSE_CODES.iter().map(|c| c.to_string()).collect(),
            direct_check: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            base_url: lookup("VNPAY_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            accept_invalid_certs: match lookup("VNPAY_ACCEPT_INVALID_CERTS") {
                Some(raw) => parse_flag(&raw).context("Invalid VNPAY_ACCEPT_INVALID_CERTS")?,
                None => defaults.accept_invalid_certs,
            },
            request_timeout_secs: lookup("VNPAY_REQUEST_TIMEOUT_SECS")
                .map(|raw| raw.trim().parse())
                .transpose()
                .context("Invalid VNPAY_REQUEST_TIMEOUT_SECS")?,
            response_codes: match lookup("VNPAY_RESPONSE_CODES") {
                Some(raw) => raw
                    .split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(ToString::to_string)
                    .collect(),
                None => defaults.response_codes,
            },
            direct_check: match lookup("VNPAY_DIRECT_CHECK") {
                Some(raw) => parse_flag(&raw).context("Invalid VNPAY_DIRECT_CHECK")?,
                None => defaults.direct_check,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Config pointed at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn api_base(&self) -> String {
        format!("{}/api/payment", self.base_url.trim_end_matches('/'))
    }

    fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http") {
            bail!("VNPAY_BASE_URL must be HTTP(S) URL");
        }
        if self.response_codes.is_empty() {
            bail!("VNPAY_RESPONSE_CODES must name at least one code");
        }
        if self.request_timeout_secs == Some(0) {
            bail!("VNPAY_REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        tracing::info!(base_url = %self.base_url, "Configuration validated");

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("Expected a boolean, got {}", raw),
    }
}
