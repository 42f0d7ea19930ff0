//! Drives the public API the way the server does for one request: parse the
//! method, decode the body, build the trace and envelope, render both.

use echo_core::{
    decode_body, declared_content_length, EchoMethod, Envelope, RequestTrace, ResponseTrace,
};
use serde_json::{json, Value};

fn handle(method: &str, path: &str, body: &[u8]) -> (String, Option<Value>) {
    let method: EchoMethod = method.parse().unwrap();
    let length = body.len().to_string();
    let headers = [
        ("Host", "localhost:8080".to_string()),
        ("Content-Length", length.clone()),
    ];
    let mut trace = RequestTrace::new(method, path, headers);

    let text = method
        .reads_body()
        .then(|| decode_body(body, declared_content_length(Some(length.as_str()))));
    if let Some(text) = &text {
        trace = trace.with_body(text.clone());
    }

    let envelope = Envelope::for_request(method, path, text.as_deref());
    let mut console = trace.to_string();
    if let Some(envelope) = &envelope {
        console.push('\n');
        console.push_str(&ResponseTrace(envelope).to_string());
    }
    let json = envelope.map(|e| serde_json::from_str(&e.to_pretty_json().unwrap()).unwrap());
    (console, json)
}

#[test]
fn post_request_end_to_end() {
    let (console, json) = handle("POST", "/api/test?v=2", br#"{"hello":"world"}"#);
    let json = json.unwrap();

    assert_eq!(json["status"], "received");
    assert_eq!(json["path"], "/api/test?v=2");
    assert_eq!(json["received_data"], json!({"hello": "world"}));
    assert!(console.contains("Method: POST"));
    assert!(console.contains("Path: /api/test?v=2"));
    assert!(console.contains(r#"Body: {"hello":"world"}"#));
    assert!(console.contains(r#"Response: {"status":"received""#));
}

#[test]
fn put_body_is_logged_but_not_echoed() {
    let (console, json) = handle("PUT", "/items/1", b"payload");

    assert!(console.contains("Body: payload"));
    assert!(json.unwrap().get("received_data").is_none());
}

#[test]
fn get_and_delete_never_log_a_body() {
    for method in ["GET", "DELETE"] {
        let (console, json) = handle(method, "/", b"ignored");
        assert!(!console.contains("Body:"), "{method}");
        assert!(json.unwrap().get("received_data").is_none());
    }
}

#[test]
fn options_produces_trace_without_response() {
    let (console, json) = handle("OPTIONS", "/", b"");

    assert!(json.is_none());
    assert!(console.contains("Method: OPTIONS"));
    assert!(!console.contains("Response:"));
}

#[test]
fn every_json_method_has_the_common_fields() {
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let (_, json) = handle(method, "/common", b"{}");
        let json = json.unwrap();
        for key in ["status", "method", "path", "timestamp"] {
            assert!(json.get(key).is_some(), "{method} missing {key}");
        }
        assert_eq!(json["method"], method);
    }
}
