use strum::{AsRefStr, Display, VariantArray};
use validator::{Validate, ValidationErrors};

use crate::{ContactSubmission, Field, Relay, RelayError, RelayPayload};

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

/// Result of asking the form to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(RelayPayload),
    /// A request from this form is already in flight.
    InFlight,
    /// The previous message was sent and has not been acknowledged yet.
    AwaitingAcknowledge,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(RelayError),
    InFlight,
    AwaitingAcknowledge,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    site_name: String,
    fields: ContactSubmission,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            fields: ContactSubmission::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn update_fields(&mut self, submission: &ContactSubmission) {
        for field in Field::VARIANTS {
            self.update_field(*field, submission.get(*field));
        }
    }

    /// Closes the gate and moves to `Submitting`.
    ///
    /// Invalid fields leave the status untouched so nothing is sent.
    pub fn begin_submit(&mut self) -> Result<Admission, SubmitError> {
        match self.status {
            SubmissionStatus::Submitting => return Ok(Admission::InFlight),
            SubmissionStatus::Succeeded => return Ok(Admission::AwaitingAcknowledge),
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }

        self.fields.validate()?;
        self.status = SubmissionStatus::Submitting;

        Ok(Admission::Admitted(RelayPayload::new(
            &self.fields,
            &self.site_name,
        )))
    }

    /// Applies the relay answer to a form in `Submitting`.
    pub fn complete(&mut self, result: &Result<(), RelayError>) -> SubmissionStatus {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(status = %self.status, "relay result for a form that is not submitting");

            return self.status;
        }

        self.status = match result {
            Ok(_) => {
                self.fields = ContactSubmission::default();
                SubmissionStatus::Succeeded
            }
            Err(_) => SubmissionStatus::Failed,
        };

        self.status
    }

    pub async fn submit<R: Relay + ?Sized>(
        &mut self,
        relay: &R,
    ) -> Result<SubmitOutcome, SubmitError> {
        let payload = match self.begin_submit()? {
            Admission::Admitted(payload) => payload,
            Admission::InFlight => return Ok(SubmitOutcome::InFlight),
            Admission::AwaitingAcknowledge => return Ok(SubmitOutcome::AwaitingAcknowledge),
        };

        let result = relay.deliver(&payload).await;
        self.complete(&result);

        Ok(match result {
            Ok(_) => SubmitOutcome::Succeeded,
            Err(err) => SubmitOutcome::Failed(err),
        })
    }

    /// Returns to `Idle` after a successful send. No-op otherwise.
    pub fn acknowledge(&mut self) -> bool {
        if self.status != SubmissionStatus::Succeeded {
            return false;
        }

        self.status = SubmissionStatus::Idle;

        true
    }
}
