use crate::error::SmokeError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(default)]
    pub success: bool,
    pub payment_url: Option<String>,
    pub message: Option<String>,
    pub order_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseCodeMeaning {
    pub meaning: Option<String>,
}

/// What came back for one request: the URL actually hit, the status, and the
/// raw body text.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, SmokeError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
