//! Shared utilities for integration testing: a scriptable mock Sui node and
//! a helper that boots the service against it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use fleet_analytics::config::AppConfig;
use fleet_analytics::http::HttpServer;
use fleet_analytics::lifecycle::Shutdown;

/// What the mock node answers to one call.
pub struct MockReply {
    pub status: u16,
    pub body: Value,
    pub delay: Duration,
}

impl MockReply {
    /// Successful JSON-RPC response carrying `result`.
    pub fn result(result: Value) -> Self {
        Self {
            status: 200,
            body: json!({ "jsonrpc": "2.0", "id": 1, "result": result }),
            delay: Duration::ZERO,
        }
    }

    /// JSON-RPC error object.
    pub fn rpc_error(code: i64, message: &str) -> Self {
        Self {
            status: 200,
            body: json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": code, "message": message }
            }),
            delay: Duration::ZERO,
        }
    }

    /// Plain HTTP failure.
    pub fn http_status(status: u16) -> Self {
        Self {
            status,
            body: json!({ "message": "upstream unavailable" }),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&str, &Value) -> MockReply + Send + Sync;

#[derive(Clone)]
struct NodeState {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<Value>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

/// Handle to a running mock node.
pub struct MockNode {
    pub url: String,
    calls: Arc<Mutex<Vec<Value>>>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockNode {
    /// Every JSON-RPC envelope received so far.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }

    /// Params of the first call to `method`.
    pub fn params_of(&self, method: &str) -> Option<Value> {
        self.calls()
            .into_iter()
            .find(|c| c["method"] == method)
            .map(|c| c["params"].clone())
    }

    /// Highest number of calls that were being served at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

/// Start a mock JSON-RPC node that answers through `responder`.
pub async fn start_mock_node<F>(responder: F) -> MockNode
where
    F: Fn(&str, &Value) -> MockReply + Send + Sync + 'static,
{
    let state = NodeState {
        responder: Arc::new(responder),
        calls: Arc::new(Mutex::new(Vec::new())),
        in_flight: Arc::new(AtomicUsize::new(0)),
        max_in_flight: Arc::new(AtomicUsize::new(0)),
    };
    let calls = state.calls.clone();
    let max_in_flight = state.max_in_flight.clone();

    let app = Router::new().route("/", post(handle_rpc)).with_state(state);
    let addr = serve(app).await;

    MockNode {
        url: format!("http://{}", addr),
        calls,
        max_in_flight,
    }
}

async fn handle_rpc(State(state): State<NodeState>, Json(envelope): Json<Value>) -> (StatusCode, Json<Value>) {
    state.calls.lock().unwrap().push(envelope.clone());

    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);

    let method = envelope["method"].as_str().unwrap_or_default().to_string();
    let reply = (state.responder)(&method, &envelope["params"]);
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    (
        StatusCode::from_u16(reply.status).unwrap(),
        Json(reply.body),
    )
}

/// Start a mock world API that serves `/api/types` only.
pub async fn start_mock_world() -> String {
    let app = Router::new().route(
        "/api/types",
        get(|| async { Json(json!([{ "typeId": 81609, "name": "Reflex" }])) }),
    );
    let addr = serve(app).await;
    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Config pointing at `rpc_url`, with world data disabled.
pub fn test_config(rpc_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.rpc.url = rpc_url.to_string();
    config.rpc.timeout_secs = 5;
    config.world.enabled = false;
    config
}

/// A running service instance.
pub struct TestService {
    pub base_url: String,
    pub shutdown: Shutdown,
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Boot the service with `config` on an ephemeral port.
pub async fn start_service(config: AppConfig) -> TestService {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        base_url: format!("http://{}", addr),
        shutdown,
    }
}

/// Owned-objects page entry with display metadata.
pub fn object_entry(id: &str, object_type: &str, name: &str) -> Value {
    json!({
        "data": {
            "objectId": id,
            "version": "3",
            "digest": format!("digest-{}", id),
            "type": object_type,
            "display": {
                "data": {
                    "name": name,
                    "description": "",
                    "image_url": format!("https://img/{}.png", id)
                },
                "error": null
            }
        }
    })
}

/// Transaction block entry with the given gas figures.
pub fn transaction_entry(digest: &str, computation: &str, storage: &str, rebate: &str) -> Value {
    json!({
        "digest": digest,
        "timestampMs": "1718000000000",
        "effects": {
            "status": { "status": "success" },
            "gasUsed": {
                "computationCost": computation,
                "storageCost": storage,
                "storageRebate": rebate,
                "nonRefundableStorageFee": "0"
            }
        }
    })
}
