use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use xustudio_contact::{FormRegistry, Relay};

use crate::template::{NotFoundTemplate, Template};

pub mod assets;
pub mod contact;
pub mod health;
pub mod index;

// Slack past the relay timeout before an in-flight form is given up on.
const PENDING_GRACE: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub forms: FormRegistry,
    pub relay: Arc<dyn Relay>,
}

impl AppState {
    pub fn new(config: crate::config::Config, relay: Arc<dyn Relay>) -> Self {
        let forms = FormRegistry::new(config.site.name.to_owned(), config.contact.form_ttl())
            .with_pending_ttl(config.relay.timeout() + PENDING_GRACE)
            .with_max_forms(config.contact.max_forms);

        Self {
            config,
            forms,
            relay,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: template.layout(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/contact/acknowledge", post(contact::acknowledge))
        .route("/static/{*path}", get(assets::asset))
        .fallback(fallback)
        .with_state(app_state)
}
