//! Handler tests for the form endpoints, using the mock email and SMS providers.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_notifications::{EnquiryService, OrderService, handlers};
use email::MockEmailProvider;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sms::MockSmsProvider;
use test_utils::TestDataBuilder;
use tower::ServiceExt;

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(email: MockEmailProvider, sms: MockSmsProvider) -> Router {
    handlers::router(
        EnquiryService::new(email, "owner@example.com"),
        OrderService::new(sms, "+91"),
    )
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_enquiry_success() {
    let email = MockEmailProvider::new();
    let builder = TestDataBuilder::from_test_name("enquiry_success");

    let response = app(email.clone(), MockSmsProvider::new())
        .oneshot(post_json(
            "/se",
            json!({
                "name": builder.name("customer", "a"),
                "phone": builder.phone_number(),
                "query": "Do you deliver on Sundays?"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Enquiry received! We'll get back to you soon.");
    assert!(email.was_sent_to("owner@example.com").await);
}

#[tokio::test]
async fn test_enquiry_missing_query_is_400_and_sends_nothing() {
    let email = MockEmailProvider::new();

    let response = app(email.clone(), MockSmsProvider::new())
        .oneshot(post_json("/se", json!({ "name": "Asha", "phone": "98765", "query": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "All fields are required.");
    assert_eq!(email.sent_count().await, 0);
}

#[tokio::test]
async fn test_enquiry_absent_fields_is_400() {
    let response = app(MockEmailProvider::new(), MockSmsProvider::new())
        .oneshot(post_json("/se", json!({ "name": "Asha" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "All fields are required.");
}

#[tokio::test]
async fn test_enquiry_whitespace_only_field_is_400() {
    let email = MockEmailProvider::new();

    let response = app(email.clone(), MockSmsProvider::new())
        .oneshot(post_json("/se", json!({ "name": "   ", "phone": "98765", "query": "Stock?" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "All fields are required.");
    assert_eq!(email.sent_count().await, 0);
}

#[tokio::test]
async fn test_enquiry_numeric_phone_is_invalid_json() {
    let email = MockEmailProvider::new();

    let response = app(email.clone(), MockSmsProvider::new())
        .oneshot(post_json("/se", json!({ "name": "Asha", "phone": 9876543210u64, "query": "Stock?" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
    assert_eq!(email.sent_count().await, 0);
}

#[tokio::test]
async fn test_enquiry_relay_failure_is_500() {
    let response = app(MockEmailProvider::failing("connection refused"), MockSmsProvider::new())
        .oneshot(post_json(
            "/se",
            json!({ "name": "Asha", "phone": "98765", "query": "Stock?" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Failed to send enquiry. Try again later.");
    assert_eq!(body["error"], "NOTIFICATION_ERROR");
}

#[tokio::test]
async fn test_place_order_prefixes_country_code() {
    let sms = MockSmsProvider::new();

    let response = app(MockEmailProvider::new(), sms.clone())
        .oneshot(post_json("/place-order", json!({ "phoneNumber": "9876543210" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Order placed successfully! SMS sent.");

    let sent = sms.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "+919876543210");
}

#[tokio::test]
async fn test_place_order_keeps_existing_prefix() {
    let sms = MockSmsProvider::new();

    app(MockEmailProvider::new(), sms.clone())
        .oneshot(post_json("/place-order", json!({ "phoneNumber": "+919876543210" })))
        .await
        .unwrap();

    assert_eq!(sms.sent_messages().await[0].to, "+919876543210");
}

#[tokio::test]
async fn test_place_order_without_number_is_400() {
    let sms = MockSmsProvider::new();

    let response = app(MockEmailProvider::new(), sms.clone())
        .oneshot(post_json("/place-order", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(sms.sent_count().await, 0);
}

#[tokio::test]
async fn test_place_order_gateway_failure_reports_reason() {
    let response = app(
        MockEmailProvider::new(),
        MockSmsProvider::failing("The 'To' number is not a valid phone number."),
    )
    .oneshot(post_json("/place-order", json!({ "phoneNumber": "123" })))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Order placed but failed to send SMS. Error: The 'To' number is not a valid phone number."
    );
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/se")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app(MockEmailProvider::new(), MockSmsProvider::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
