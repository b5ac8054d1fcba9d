//! FILENAME: tests/test_calculate.rs
//! Integration tests for the calculation endpoint (default configuration).

mod common;

use common::TestHarness;
use serde_json::json;

// ============================================================================
// SUCCESSFUL EVALUATION
// ============================================================================

#[tokio::test]
async fn test_precedence_and_parentheses() {
    let harness = TestHarness::start().await;

    let cases = [
        ("2 + 3 * (4 - 1)", "11.0"),
        ("2+2*2", "6.0"),
        ("(2+2)*2", "8.0"),
        ("2+2", "4.0"),
        ("8-3-2", "3.0"),
    ];

    for (expression, expected) in cases {
        let (status, body) = harness.calculate(expression).await;
        assert_eq!(status, 200, "expression {}", expression);
        assert_eq!(body, json!({ "result": expected }), "expression {}", expression);
    }
}

#[tokio::test]
async fn test_decimals_and_signs() {
    let harness = TestHarness::start().await;

    assert_eq!(harness.calculate("1.5+2.5").await, (200, json!({ "result": "4.0" })));
    assert_eq!(harness.calculate("7/2").await, (200, json!({ "result": "3.5" })));
    assert_eq!(harness.calculate("-(2+3)*2").await, (200, json!({ "result": "-10.0" })));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let harness = TestHarness::start().await;

    let first = harness.calculate("10/4*3-1").await;
    let second = harness.calculate("10/4*3-1").await;
    assert_eq!(first, second);
    assert_eq!(first, (200, json!({ "result": "6.5" })));
}

#[tokio::test]
async fn test_content_type_is_not_required() {
    let harness = TestHarness::start().await;

    let (status, body) = harness.post_raw(r#"{"expression": "1+1"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"result":"2.0"}"#);
}

// ============================================================================
// FAILURES
// ============================================================================

#[tokio::test]
async fn test_letters_are_unprocessable() {
    let harness = TestHarness::start().await;

    for expression in ["2 + 2 * a", "2+2*2a", "X"] {
        let (status, body) = harness.calculate(expression).await;
        assert_eq!(status, 422);
        assert_eq!(body, json!({ "error": "Expression is not valid" }));
    }
}

#[tokio::test]
async fn test_unknown_symbols_are_unprocessable() {
    let harness = TestHarness::start().await;

    let (status, body) = harness.calculate("2 % 3").await;
    assert_eq!(status, 422);
    assert_eq!(body, json!({ "error": "Expression is not valid" }));
}

#[tokio::test]
async fn test_structural_failures_are_generic_server_errors() {
    let harness = TestHarness::start().await;

    for expression in ["2 / 0", "(2+3", "2+3)", "2+", ""] {
        let (status, body) = harness.calculate(expression).await;
        assert_eq!(status, 500, "expression {:?}", expression);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

#[tokio::test]
async fn test_undecodable_body_is_bad_request() {
    let harness = TestHarness::start().await;

    let (status, body) = harness.post_raw("not json").await;
    assert_eq!(status, 400);
    assert_eq!(body, r#"{"error":"Invalid request"}"#);

    let (status, _) = harness.post_raw(r#"{"expression": 5}"#).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_only_post_is_allowed() {
    let harness = TestHarness::start().await;
    assert_eq!(harness.get().await, 405);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = TestHarness::start().await;

    let status = harness
        .client
        .post(format!("{}/api/v2/calculate", harness.base_url))
        .body("{}")
        .send()
        .await
        .unwrap()
        .status()
        .as_u16();
    assert_eq!(status, 404);
}
