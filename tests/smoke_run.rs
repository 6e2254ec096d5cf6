//! End-to-end runs of the full check sequence against mock servers

use mockito::{Matcher, Server};
use serde_json::json;
use vnpay_smoke::{checks::CheckOutcome, config::Config, runner::SmokeRunner};

#[tokio::test]
async fn run_completes_when_every_endpoint_misbehaves() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/payment/create-payment")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": false, "message": "declined" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let callback = server
        .mock("GET", "/api/payment/callback")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("callback exploded")
        .expect(1)
        .create_async()
        .await;
    let ipn = server
        .mock("POST", "/api/payment/ipn")
        .match_query(Matcher::Any)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let meaning = server
        .mock("GET", "/api/payment/response-code/00")
        .with_status(200)
        .with_body(json!({ "meaning": "Success" }).to_string())
        .create_async()
        .await;
    let invalid = server
        .mock("GET", "/api/payment/response-code/invalid")
        .with_status(400)
        .with_body(json!({ "message": "Invalid response code" }).to_string())
        .create_async()
        .await;
    let unknown = server
        .mock("GET", "/api/payment/response-code/24")
        .with_status(404)
        .with_body("no such code")
        .create_async()
        .await;

    let config = Config {
        response_codes: vec!["00".into(), "24".into(), "invalid".into()],
        ..Config::with_base_url(server.url())
    };
    let runner = SmokeRunner::from_config(&config).unwrap();

    let mut out = Vec::new();
    let summary = runner.run(&mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    create.assert_async().await;
    callback.assert_async().await;
    ipn.assert_async().await;
    meaning.assert_async().await;
    invalid.assert_async().await;
    unknown.assert_async().await;

    assert_eq!(summary.reports.len(), 4);
    assert_eq!(summary.passed(), 0);
    assert_eq!(summary.failed(), 4);

    assert!(text.contains("=== Testing Create Payment ==="));
    assert!(text.contains("Payment creation failed: declined"));
    assert!(text.contains("Callback failed with status 500"));
    assert!(text.contains("IPN failed with status 404"));
    assert!(text.contains("Code 00: Success"));
    assert!(text.contains(r#"Code invalid: [400] {"message":"Invalid response code"}"#));
    assert!(text.trim_end().ends_with("Test completed!"));
}

#[tokio::test]
async fn run_completes_when_server_is_down() {
    let runner = SmokeRunner::from_config(&Config::with_base_url("http://127.0.0.1:1")).unwrap();

    let mut out = Vec::new();
    let summary = runner.run(&mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.reports.len(), 4);
    assert_eq!(summary.errored(), 4);
    assert!(summary
        .reports
        .iter()
        .all(|r| matches!(r.outcome, CheckOutcome::Errored { .. })));
    assert!(text.contains("=== Testing Response Code Meaning ==="));
    assert!(text.contains("Summary: 0 passed, 0 failed, 4 errored"));
    assert!(text.trim_end().ends_with("Test completed!"));
}

#[tokio::test]
async fn healthy_service_passes_every_check() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/api/payment/create-payment")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "paymentUrl": "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html?vnp_TxnRef=TEST_ORDER_001",
                "message": "Payment URL created successfully",
                "orderId": "TEST_ORDER_001"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _direct = server
        .mock("POST", "/api/payment/create-payment-direct")
        .with_status(200)
        .with_body(json!({ "success": true, "paymentUrl": "https://pay.example/direct" }).to_string())
        .create_async()
        .await;
    let _callback = server
        .mock("GET", "/api/payment/callback")
        .match_query(Matcher::Any)
        .with_status(302)
        .with_header("location", "https://shop.example/payment-callback?status=success")
        .create_async()
        .await;
    let _ipn = server
        .mock("POST", "/api/payment/ipn")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "RspCode": "00", "Message": "success" }).to_string())
        .create_async()
        .await;
    let _codes = server
        .mock("GET", Matcher::Regex(r"^/api/payment/response-code/\d{2}$".to_string()))
        .with_status(200)
        .with_body(json!({ "meaning": "Known code" }).to_string())
        .create_async()
        .await;
    let _invalid = server
        .mock("GET", "/api/payment/response-code/invalid")
        .with_status(400)
        .with_body("Invalid response code")
        .create_async()
        .await;

    let config = Config {
        direct_check: true,
        ..Config::with_base_url(server.url())
    };
    let runner = SmokeRunner::from_config(&config).unwrap();

    let mut out = Vec::new();
    let summary = runner.run(&mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.reports.len(), 5);
    assert_eq!(summary.passed(), 5, "{}", text);
    assert!(text.contains("Payment URL created: https://sandbox.vnpayment.vn/paymentv2/vpcpay.html?vnp_TxnRef=TEST_ORDER_001"));
    assert!(text.contains("Code 99: Known code"));
    assert!(text.contains("Code invalid: [400] Invalid response code"));
}
