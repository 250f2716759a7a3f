//! Shared setup for router tests: a fixed configuration and an in-memory relay.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use xustudio::{
    AppState, Config,
    config::{ContactConfig, ObservabilityConfig, RelayConfig, ServerConfig, SiteConfig},
};
use xustudio_contact::{Relay, RelayError, RelayPayload};

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            name: "Xu Studio".to_string(),
            legal_name: "Xu Studio LLC".to_string(),
            url: "https://thexustudio.com".to_string(),
            contact_email: "contact@thexustudio.com".to_string(),
            title: "Xu Studio | AI Integration & Software Development".to_string(),
            description: "Transform your business with AI.".to_string(),
            founder: "Ethan Pan".to_string(),
            founded: 2020,
            locality: "San Francisco".to_string(),
            region: "CA".to_string(),
            country: "US".to_string(),
            keywords: vec!["AI integration".to_string(), "LLM development".to_string()],
            same_as: vec!["https://github.com/ethansure".to_string()],
        },
        relay: RelayConfig {
            endpoint: "https://formsubmit.co/ajax".to_string(),
            url: None,
            timeout_secs: 15,
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Relay double that records every payload and answers with a fixed result.
pub struct FakeRelay {
    accept: bool,
    calls: AtomicUsize,
    payloads: Mutex<Vec<RelayPayload>>,
}

impl FakeRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::new(true))
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self::new(false))
    }

    fn new(accept: bool) -> Self {
        Self {
            accept,
            calls: AtomicUsize::new(0),
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
impl Relay for FakeRelay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        if self.accept {
            Ok(())
        } else {
            Err(RelayError::Transport("connection reset by peer".into()))
        }
    }
}

pub fn create_test_app(relay: Arc<FakeRelay>) -> Router {
    xustudio::routes::router(AppState::new(create_test_config(), relay))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Posts an urlencoded form, as a fragment request when `partial` is set.
pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    partial: bool,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if partial {
        builder = builder.header("ts-request", "true");
    }

    let body = serde_urlencoded::to_string(fields).unwrap();

    app.clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Reads the form token out of rendered HTML.
pub fn form_token(html: &str) -> String {
    let marker = r#"name="token" value=""#;
    let start = html.find(marker).expect("token input should be rendered") + marker.len();
    let end = html[start..].find('"').unwrap() + start;

    html[start..end].to_owned()
}
