/*
[INPUT]:  Scenarios that emit advisory tracing signals
[OUTPUT]: Test results for oversized-count and deprecation warnings
[POS]:    Integration tests - observable diagnostics
[UPDATE]: When advisory signals change wording or delivery
*/

use firi_adapter::{ClientConfig, FiriClient};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Collects formatted log output so tests can assert on emitted warnings.
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("capture lock")).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_warnings() -> (CaptureWriter, tracing::subscriber::DefaultGuard) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (writer, guard)
}

fn client_for(server: &MockServer) -> FiriClient {
    let config = ClientConfig {
        base_url: server.uri(),
        rate_limit: Duration::ZERO,
        ..ClientConfig::default()
    };
    FiriClient::with_config("test-token", config).expect("client init")
}

#[tokio::test]
async fn oversized_count_warning_is_observable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/history/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (writer, _guard) = capture_warnings();

    client
        .history_transactions(Some(50_000))
        .await
        .expect("oversized count must still dispatch");

    let logs = writer.contents();
    assert!(
        logs.contains("exceeds the advisory maximum"),
        "expected an advisory warning, got: {logs}"
    );
}

#[tokio::test]
async fn within_bounds_count_emits_no_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/history/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (writer, _guard) = capture_warnings();

    client
        .history_transactions(Some(100))
        .await
        .expect("history_transactions failed");

    assert!(!writer.contents().contains("exceeds the advisory maximum"));
}

#[tokio::test]
#[allow(deprecated)]
async fn deprecated_call_warns_once_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/orders/BTCNOK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cancelled": 0})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (writer, _guard) = capture_warnings();

    let signal = "delete_orders_marketormarketsid is deprecated";

    client
        .delete_orders_marketormarketsid("BTCNOK")
        .await
        .expect("legacy name failed");
    assert_eq!(writer.contents().matches(signal).count(), 1);

    client
        .delete_orders_marketormarketsid("BTCNOK")
        .await
        .expect("legacy name failed");
    assert_eq!(writer.contents().matches(signal).count(), 2);
}

#[tokio::test]
#[allow(deprecated)]
async fn replacement_method_emits_no_deprecation_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/XRP/address"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "rXRP..."})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (writer, _guard) = capture_warnings();

    client.xrp_address().await.expect("xrp_address failed");
    assert!(!writer.contents().contains("deprecated"));

    client
        .xrp_withdraw_address()
        .await
        .expect("xrp_withdraw_address failed");
    assert_eq!(
        writer
            .contents()
            .matches("xrp_withdraw_address is deprecated")
            .count(),
        1
    );
}
