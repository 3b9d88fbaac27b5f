#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::test;
use serde_json::Value;

/// Validate that an error response follows the ProblemDetails structure.
///
/// Checks the status, the `x-trace-id` header, the content type, the
/// challenge-header rule for 401s, and the body keys and values. The body
/// must carry no per-request data: two requests failing the same way must
/// produce identical bodies, so the trace id lives in the header only.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);
    assert_trace_header(resp.headers());
    assert_problem_content_type(resp.headers());
    assert_challenge_rule(resp.headers(), expected_status);

    let problem = read_problem_body(resp).await;

    for key in ["type", "title", "status", "detail", "code"] {
        assert!(
            problem.get(key).is_some(),
            "{key} field should be present"
        );
    }
    assert!(
        problem.get("trace_id").is_none(),
        "error bodies must not carry per-request data"
    );

    assert_eq!(problem["code"], expected_code);
    assert_eq!(problem["detail"], expected_detail);
    assert_eq!(problem["status"], expected_status);

    let type_url = problem["type"]
        .as_str()
        .expect("type field should be a string");
    assert!(
        type_url.starts_with("https://propertypulse.app/errors/"),
        "type should be an error-catalog URL (got {type_url})"
    );
}

fn assert_trace_header(headers: &HeaderMap) {
    let value = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!value.is_empty(), "x-trace-id header should not be empty");
}

fn assert_problem_content_type(headers: &HeaderMap) {
    // Prefix match: the header may carry a charset parameter
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );
}

/// RFC 7235: a challenge on every 401, and only on 401.
fn assert_challenge_rule(headers: &HeaderMap, status: u16) {
    let challenge = headers.get("WWW-Authenticate");
    if status == 401 {
        let value = challenge
            .expect("401 responses must carry WWW-Authenticate")
            .to_str()
            .expect("WWW-Authenticate should be valid UTF-8");
        assert_eq!(value, "Bearer");
    } else {
        assert!(
            challenge.is_none(),
            "{status} responses must not carry WWW-Authenticate"
        );
    }
}

async fn read_problem_body(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");

    serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("error body is not valid JSON. Raw body: {body_str}"))
}
