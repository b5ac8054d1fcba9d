//! FILENAME: tests/test_config.rs
//! Integration tests for configuration-driven behavior (error policy, numeric mode, route).

mod common;

use calc_service::{ErrorPolicy, NumericMode, ServerConfig};
use common::TestHarness;
use serde_json::json;

// ============================================================================
// ERROR POLICY
// ============================================================================

#[tokio::test]
async fn test_descriptive_policy_reports_cause() {
    let harness = TestHarness::with_config(ServerConfig {
        error_policy: ErrorPolicy::Descriptive,
        ..ServerConfig::default()
    })
    .await;

    assert_eq!(
        harness.calculate("(2+3").await,
        (500, json!({ "error": "mismatched parentheses" }))
    );
    assert_eq!(
        harness.calculate("2/0").await,
        (500, json!({ "error": "division by zero" }))
    );
    assert_eq!(
        harness.calculate("2+").await,
        (500, json!({ "error": "malformed expression" }))
    );
    assert_eq!(
        harness.calculate("2$2").await,
        (422, json!({ "error": "invalid token '$'" }))
    );
    assert_eq!(
        harness.calculate("2*a").await,
        (422, json!({ "error": "invalid expression" }))
    );
}

// ============================================================================
// NUMERIC MODE
// ============================================================================

#[tokio::test]
async fn test_integer_mode_truncates_division() {
    let harness = TestHarness::with_config(ServerConfig {
        numeric_mode: NumericMode::Integer,
        ..ServerConfig::default()
    })
    .await;

    assert_eq!(harness.calculate("7/2").await, (200, json!({ "result": "3" })));
    assert_eq!(harness.calculate("2+3*(4-1)").await, (200, json!({ "result": "11" })));
    assert_eq!(
        harness.calculate("1.5+1").await,
        (422, json!({ "error": "Expression is not valid" }))
    );
}

#[tokio::test]
async fn test_integer_mode_decimal_is_client_error_anywhere() {
    let harness = TestHarness::with_config(ServerConfig {
        numeric_mode: NumericMode::Integer,
        ..ServerConfig::default()
    })
    .await;

    for expression in ["2/0+1.5", "(1.5"] {
        assert_eq!(
            harness.calculate(expression).await,
            (422, json!({ "error": "Expression is not valid" })),
            "expression {:?}",
            expression
        );
    }
    assert_eq!(
        harness.calculate("-9223372036854775808").await,
        (200, json!({ "result": "-9223372036854775808" }))
    );
}

// ============================================================================
// ROUTE
// ============================================================================

#[tokio::test]
async fn test_custom_route() {
    let harness = TestHarness::with_config(ServerConfig {
        route: "/calc".to_string(),
        ..ServerConfig::default()
    })
    .await;

    assert!(harness.url().ends_with("/calc"));
    assert_eq!(harness.calculate("1+2").await, (200, json!({ "result": "3.0" })));
}
