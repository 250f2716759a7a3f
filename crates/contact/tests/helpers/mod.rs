#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::sync::Notify;
use xustudio_contact::{ContactSubmission, Relay, RelayError, RelayPayload};

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        company: String::new(),
        message: "Need an AI audit".to_owned(),
    }
}

#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
pub struct MockRelayServer {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockRelayServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn handle(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    };

    state.requests.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_owned(),
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match state.reply {
        Reply::Json(status, value) => (status, Json(value)).into_response(),
        Reply::Text(status, text) => (status, text).into_response(),
    }
}

/// Starts an in-process relay answering every request with `reply`.
pub async fn spawn_relay(reply: Reply) -> anyhow::Result<MockRelayServer> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(handle).with_state(MockState {
        reply,
        requests: requests.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(MockRelayServer {
        url: format!("http://{addr}/ajax/contact@thexustudio.com"),
        requests,
    })
}

/// Address nothing listens on.
pub async fn closed_addr() -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(addr)
}

/// In-memory relay that counts calls and can hold a request in flight.
pub struct ScriptedRelay {
    calls: AtomicUsize,
    accept: bool,
    hold: bool,
    pub started: Notify,
    pub release: Notify,
    payloads: Mutex<Vec<RelayPayload>>,
}

impl ScriptedRelay {
    pub fn accepting() -> Self {
        Self::new(true, false)
    }

    pub fn rejecting() -> Self {
        Self::new(false, false)
    }

    pub fn held() -> Self {
        Self::new(true, true)
    }

    pub fn held_rejecting() -> Self {
        Self::new(false, true)
    }

    fn new(accept: bool, hold: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            accept,
            hold,
            started: Notify::new(),
            release: Notify::new(),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<RelayPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relay for ScriptedRelay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        if self.hold {
            self.started.notify_one();
            self.release.notified().await;
        }

        if self.accept {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: Some(200),
                message: None,
            })
        }
    }
}
