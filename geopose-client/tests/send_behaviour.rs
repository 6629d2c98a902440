//! Behavioural tests for [`GeoPoseClient::send_request`].
//!
//! These tests use [`StubTransport`] to verify behaviour without requiring a
//! running GeoPose service.

use geopose_client::test_support::StubTransport;
use geopose_client::{
    GeoPoseClient, SendError, ServiceResponse, TransportError, TransportOptions,
};
use geopose_core::{GeoPoseRequest, Privacy, Sensor, SensorType};
use reqwest::header::CONTENT_TYPE;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use std::cell::RefCell;

const SERVICE_URL: &str = "http://geopose.example.com/scr/geopose";

/// Client under test, configured by the Given steps.
type ClientCell = RefCell<Option<GeoPoseClient<StubTransport>>>;

/// Outcome of the most recent send.
type ResultCell = RefCell<Option<Result<ServiceResponse, SendError>>>;

#[fixture]
fn client() -> ClientCell {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn valid_payload() -> String {
    let mut request = GeoPoseRequest::new("request_uuid").with_timestamp(42.0);
    request
        .add_sensor(Sensor::new("gps", SensorType::Geolocation))
        .expect("sensor registers");
    request.to_json().expect("request serializes")
}

fn pose_json() -> Value {
    json!({
        "id": "pose",
        "timestamp": 43,
        "accuracy": {"position": 2, "orientation": 5},
        "type": "geopose",
        "geopose": {
            "position": {"lon": -0.12, "lat": 51.5, "h": 30},
            "quaternion": {"x": 0, "y": 0, "z": 0.7071, "w": 0.7071}
        }
    })
}

fn set_stub(client: &ClientCell, stub: StubTransport) {
    *client.borrow_mut() = Some(GeoPoseClient::from_transport(stub));
}

fn send(client: &ClientCell, result: &ResultCell, payload: &str) {
    let guard = client.borrow();
    let client = guard.as_ref().expect("client must be initialised");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime builds");
    let outcome =
        runtime.block_on(client.send_request(SERVICE_URL, payload, TransportOptions::default()));
    *result.borrow_mut() = Some(outcome);
}

// --- Given steps ---

#[given("a service answering with a valid pose")]
fn service_ok(#[from(client)] client: &ClientCell) {
    set_stub(client, StubTransport::with_json(&pose_json()));
}

#[given("a service answering with arbitrary JSON")]
fn service_arbitrary(#[from(client)] client: &ClientCell) {
    set_stub(client, StubTransport::with_json(&json!({"status": "ok"})));
}

#[given("a service failing with status 500")]
fn service_failing(#[from(client)] client: &ClientCell) {
    set_stub(
        client,
        StubTransport::with_response(500, "localization failed"),
    );
}

#[given("a service that cannot be reached")]
fn service_unreachable(#[from(client)] client: &ClientCell) {
    set_stub(
        client,
        StubTransport::with_error(TransportError::Network {
            url: SERVICE_URL.to_owned(),
            message: "connection refused".to_owned(),
        }),
    );
}

#[given("validation is disabled")]
fn validation_disabled(#[from(client)] client: &ClientCell) {
    client
        .borrow_mut()
        .as_mut()
        .expect("client must be initialised")
        .validate_request(false);
}

// --- When steps ---

#[when("I send a valid request")]
fn send_valid(#[from(client)] client: &ClientCell, #[from(result)] result: &ResultCell) {
    send(client, result, &valid_payload());
}

#[when("I send an incomplete request")]
fn send_incomplete(#[from(client)] client: &ClientCell, #[from(result)] result: &ResultCell) {
    send(client, result, r#"{"id":"request_uuid"}"#);
}

// --- Then steps ---

#[then("a validated pose is returned")]
fn then_validated(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    let response = match guard.as_ref() {
        Some(Ok(ServiceResponse::Validated(response))) => response,
        other => panic!("expected validated response, got {other:?}"),
    };
    assert_eq!(response.id, "pose");
    assert_eq!(response.timestamp, 43.0);
}

#[then("the service received the payload as JSON")]
fn then_payload_received(#[from(client)] client: &ClientCell) {
    let guard = client.borrow();
    let stub = guard.as_ref().expect("client must be initialised").transport();
    let sent = stub.last_request().expect("a request was sent");
    assert_eq!(sent.body, valid_payload());
    assert_eq!(
        sent.headers.get(CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(b"application/json".as_slice())
    );
}

#[then("the service received nothing")]
fn then_nothing_received(#[from(client)] client: &ClientCell) {
    let guard = client.borrow();
    let stub = guard.as_ref().expect("client must be initialised").transport();
    assert!(stub.requests().is_empty());
}

#[then("a request schema error is returned")]
fn then_request_schema(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    assert!(
        matches!(guard.as_ref(), Some(Err(SendError::RequestSchema(_)))),
        "expected RequestSchema, got {guard:?}"
    );
}

#[then("the raw JSON is returned")]
fn then_raw(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    match guard.as_ref() {
        Some(Ok(ServiceResponse::Unchecked(value))) => {
            assert_eq!(value, &json!({"status": "ok"}));
        }
        other => panic!("expected unchecked response, got {other:?}"),
    }
}

#[then("an HTTP error with the service message is returned")]
fn then_http_error(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    match guard.as_ref() {
        Some(Err(SendError::Transport(TransportError::Http { status, body, .. }))) => {
            assert_eq!(*status, 500);
            assert_eq!(body, "localization failed");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[then("a response schema error is returned")]
fn then_response_schema(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    assert!(
        matches!(guard.as_ref(), Some(Err(SendError::ResponseSchema(_)))),
        "expected ResponseSchema, got {guard:?}"
    );
}

#[then("a network error is returned")]
fn then_network_error(#[from(result)] result: &ResultCell) {
    let guard = result.borrow();
    assert!(
        matches!(
            guard.as_ref(),
            Some(Err(SendError::Transport(TransportError::Network { .. })))
        ),
        "expected Network error, got {guard:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/send.feature", name = $title)]
        fn $fn_name(client: ClientCell, result: ResultCell) {
            let _ = (client, result);
        }
    };
}

register_scenario!(conforming_exchange, "a conforming exchange");
register_scenario!(invalid_payload, "an invalid payload is rejected locally");
register_scenario!(validation_disabled_scenario, "validation can be disabled");
register_scenario!(service_rejects, "the service rejects the request");
register_scenario!(malformed_pose, "the service answers with a malformed pose");
register_scenario!(unreachable_service, "the service cannot be reached");
