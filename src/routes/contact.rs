use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use xustudio_contact::{
    ContactSubmission, FormSnapshot, SubmissionStatus, SubmitError, SubmitOutcome,
};

use crate::routes::{AppState, index::IndexTemplate};
use crate::template::Template;

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const INVALID_MESSAGE: &str =
    "Please enter your name, a valid email address and a message.";

/// Contact panel as rendered for one form instance.
pub struct ContactSection {
    pub token: String,
    pub status: SubmissionStatus,
    pub fields: ContactSubmission,
    pub error: Option<&'static str>,
}

impl ContactSection {
    pub fn new(form: FormSnapshot) -> Self {
        Self {
            token: form.token,
            status: form.status,
            fields: form.fields,
            error: None,
        }
    }

    pub fn with_error(mut self, error: &'static str) -> Self {
        self.error = Some(error);
        self
    }

    pub fn succeeded(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact.html")]
pub struct ContactFragment {
    pub contact: ContactSection,
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub fields: ContactSubmission,
}

fn render_section(template: &Template, contact: ContactSection) -> axum::response::Response {
    if template.is_partial() {
        return template.render(ContactFragment { contact });
    }

    template.render(IndexTemplate::new(template, contact))
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let report = app
        .forms
        .submit(&input.token, &input.fields, app.relay.clone())
        .await;

    let section = ContactSection::new(report.form);
    let section = match report.outcome {
        Ok(SubmitOutcome::Succeeded) => {
            tracing::info!(token = section.token, "contact message relayed");
            section
        }
        Ok(SubmitOutcome::Failed(err)) => {
            tracing::warn!(token = section.token, err = %err, "contact relay failed");
            section.with_error(FAILURE_MESSAGE)
        }
        Ok(SubmitOutcome::InFlight) => {
            tracing::debug!(token = section.token, "duplicate contact submission ignored");
            section
        }
        Ok(SubmitOutcome::AwaitingAcknowledge) => section,
        Err(SubmitError::Invalid(errors)) => {
            tracing::debug!(token = section.token, errors = %errors, "contact form invalid");
            section.with_error(INVALID_MESSAGE)
        }
    };

    render_section(&template, section)
}

#[derive(Deserialize)]
pub struct AcknowledgeInput {
    #[serde(default)]
    pub token: String,
}

pub async fn acknowledge(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<AcknowledgeInput>,
) -> impl IntoResponse {
    let (_, form) = app.forms.acknowledge(&input.token).await;

    render_section(&template, ContactSection::new(form))
}
