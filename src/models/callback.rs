use serde::{Deserialize, Serialize};

/// Query parameters the provider appends to the return URL and to the IPN.
/// Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VnpCallbackParams {
    #[serde(rename = "vnp_Amount")]
    pub amount: String,
    #[serde(rename = "vnp_BankCode")]
    pub bank_code: String,
    #[serde(rename = "vnp_BankTranNo")]
    pub bank_tran_no: String,
    #[serde(rename = "vnp_CardType")]
    pub card_type: String,
    #[serde(rename = "vnp_OrderInfo")]
    pub order_info: String,
    #[serde(rename = "vnp_PayDate")]
    pub pay_date: String,
    #[serde(rename = "vnp_ResponseCode")]
    pub response_code: String,
    #[serde(rename = "vnp_TmnCode")]
    pub tmn_code: String,
    #[serde(rename = "vnp_TransactionNo")]
    pub transaction_no: String,
    #[serde(rename = "vnp_TransactionStatus")]
    pub transaction_status: String,
    #[serde(rename = "vnp_TxnRef")]
    pub txn_ref: String,
    // Placeholder, not computed from a secret
    #[serde(rename = "vnp_SecureHash")]
    pub secure_hash: String,
}

impl VnpCallbackParams {
    pub fn sample() -> Self {
        Self {
            amount: "10000000".to_string(),
            bank_code: "NCB".to_string(),
            bank_tran_no: "VNP12345678".to_string(),
            card_type: "ATM".to_string(),
            order_info: "Test payment".to_string(),
            pay_date: "20231201120000".to_string(),
            response_code: "00".to_string(),
            tmn_code: "2QXUI4J4".to_string(),
            transaction_no: "12345678".to_string(),
            transaction_status: "00".to_string(),
            txn_ref: "TEST_ORDER_001".to_string(),
            secure_hash: "abc123".to_string(),
        }
    }
}
