use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: String,
    /// Minor currency units (VND has no subunit, so this is whole dong).
    pub amount: i64,
    pub order_info: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl PaymentRequest {
    pub fn sample() -> Self {
        Self {
            order_id: "TEST_ORDER_001".to_string(),
            amount: 100_000,
            order_info: "Test payment for order TEST_ORDER_001".to_string(),
            customer_name: "Test Customer".to_string(),
            customer_email: "test@example.com".to_string(),
            customer_phone: "0123456789".to_string(),
        }
    }
}

/// Body shape the `create-payment` endpoint binds: `{"request": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequestEnvelope {
    pub request: PaymentRequest,
}

impl From<PaymentRequest> for PaymentRequestEnvelope {
    fn from(request: PaymentRequest) -> Self {
        Self { request }
    }
}
