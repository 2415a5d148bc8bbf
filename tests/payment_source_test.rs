use accounts_demo::domain::ports::PaymentSource;
use accounts_demo::HttpPaymentSource;
use httpmock::prelude::*;

#[tokio::test]
async fn test_payments_parsed_from_json_array() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"id": 1, "amount": 25.50, "timestamp": "2024-01-15T10:30:00Z"},
        {"id": 2, "amount": 120.00, "timestamp": "2024-01-16T08:00:00Z"}
    ]);

    let payments_mock = server.mock(|when, then| {
        when.method(GET).path("/payments");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let source = HttpPaymentSource::new(server.url("/payments"));
    let payments = source.current_payments().await.unwrap();

    payments_mock.assert();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].id, 1);
    assert_eq!(payments[0].amount, 25.50);
    assert_eq!(payments[1].id, 2);
}

#[tokio::test]
async fn test_non_success_status_yields_empty_list() {
    let server = MockServer::start();
    let payments_mock = server.mock(|when, then| {
        when.method(GET).path("/payments");
        then.status(500).body("Internal Server Error");
    });

    let source = HttpPaymentSource::new(server.url("/payments"));
    let payments = source.current_payments().await.unwrap();

    payments_mock.assert();
    assert!(payments.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/payments");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{ this is not json");
    });

    let source = HttpPaymentSource::new(server.url("/payments"));
    assert!(source.current_payments().await.is_err());
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    // Port 1 is reserved and should refuse connections
    let source = HttpPaymentSource::new("http://127.0.0.1:1/payments".to_string());
    assert!(source.current_payments().await.is_err());
}
