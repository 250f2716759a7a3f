use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};
use ulid::Ulid;

use crate::{
    Admission, ContactForm, ContactSubmission, Relay, RelayError, SubmissionStatus, SubmitError,
    SubmitOutcome,
};

pub const DEFAULT_MAX_FORMS: usize = 10_000;

/// State of one form as seen by the page that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSnapshot {
    pub token: String,
    pub status: SubmissionStatus,
    pub fields: ContactSubmission,
}

#[derive(Debug)]
pub struct SubmitReport {
    pub outcome: Result<SubmitOutcome, SubmitError>,
    pub form: FormSnapshot,
}

struct Entry {
    form: ContactForm,
    touched: Instant,
}

/// One [`ContactForm`] per page load, addressed by a ULID token.
///
/// Only tokens handed out by this registry are honored. Anything else gets
/// a freshly issued form. The number of live forms is capped; when full the
/// least recently used idle form is evicted.
#[derive(Clone)]
pub struct FormRegistry {
    forms: Arc<Mutex<HashMap<String, Entry>>>,
    site_name: Arc<str>,
    ttl: Duration,
    pending_ttl: Duration,
    max_forms: usize,
}

impl FormRegistry {
    pub fn new(site_name: impl Into<String>, ttl: Duration) -> Self {
        Self {
            forms: Arc::default(),
            site_name: site_name.into().into(),
            ttl,
            pending_ttl: ttl,
            max_forms: DEFAULT_MAX_FORMS,
        }
    }

    /// How long a form may stay `Submitting` before it is dropped.
    pub fn with_pending_ttl(mut self, pending_ttl: Duration) -> Self {
        self.pending_ttl = pending_ttl;
        self
    }

    pub fn with_max_forms(mut self, max_forms: usize) -> Self {
        self.max_forms = max_forms.max(1);
        self
    }

    pub async fn len(&self) -> usize {
        self.forms.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.forms.lock().await.is_empty()
    }

    pub async fn issue(&self) -> FormSnapshot {
        let mut forms = self.forms.lock().await;
        self.prune(&mut forms);

        let (token, entry) = self.open(&mut forms, "");
        snapshot(&token, &entry.form)
    }

    pub async fn snapshot(&self, token: &str) -> Option<FormSnapshot> {
        let forms = self.forms.lock().await;

        forms.get(token).map(|entry| snapshot(token, &entry.form))
    }

    /// Overwrites the fields of a form without submitting it.
    pub async fn update(&self, token: &str, fields: &ContactSubmission) -> FormSnapshot {
        let mut forms = self.forms.lock().await;
        self.prune(&mut forms);

        let (token, entry) = self.open(&mut forms, token);
        entry.form.update_fields(fields);

        snapshot(&token, &entry.form)
    }

    /// Copies the posted fields into the form and tries to start a submission.
    ///
    /// A form that is in flight or awaiting acknowledge keeps its values.
    pub async fn begin(
        &self,
        token: &str,
        fields: &ContactSubmission,
    ) -> (Result<Admission, SubmitError>, FormSnapshot) {
        let mut forms = self.forms.lock().await;
        self.prune(&mut forms);

        let (token, entry) = self.open(&mut forms, token);
        if !matches!(
            entry.form.status(),
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        ) {
            entry.form.update_fields(fields);
        }
        let admission = entry.form.begin_submit();

        (admission, snapshot(&token, &entry.form))
    }

    pub async fn complete(&self, token: &str, result: &Result<(), RelayError>) -> FormSnapshot {
        let mut forms = self.forms.lock().await;

        if let Some(entry) = forms.get_mut(token) {
            entry.form.complete(result);
            entry.touched = Instant::now();

            return snapshot(token, &entry.form);
        }

        tracing::warn!(token, "relay result for a form that has expired");
        let (token, entry) = self.open(&mut forms, "");
        snapshot(&token, &entry.form)
    }

    /// Runs a whole submission. The lock is released while the relay call is in flight.
    ///
    /// Delivery and completion run on their own task so the form leaves
    /// `Submitting` even when the caller is dropped midway.
    pub async fn submit<R: Relay + ?Sized + 'static>(
        &self,
        token: &str,
        fields: &ContactSubmission,
        relay: Arc<R>,
    ) -> SubmitReport {
        let (admission, form) = self.begin(token, fields).await;

        let payload = match admission {
            Ok(Admission::Admitted(payload)) => payload,
            Ok(Admission::InFlight) => {
                return SubmitReport {
                    outcome: Ok(SubmitOutcome::InFlight),
                    form,
                };
            }
            Ok(Admission::AwaitingAcknowledge) => {
                return SubmitReport {
                    outcome: Ok(SubmitOutcome::AwaitingAcknowledge),
                    form,
                };
            }
            Err(err) => {
                return SubmitReport {
                    outcome: Err(err),
                    form,
                };
            }
        };

        let registry = self.clone();
        let token = form.token;
        let delivery = tokio::spawn({
            let token = token.clone();
            async move {
                let result = relay.deliver(&payload).await;
                let form = registry.complete(&token, &result).await;

                (result, form)
            }
        });

        let (result, form) = match delivery.await {
            Ok(delivered) => delivered,
            Err(err) => {
                tracing::error!(token, err = %err, "contact delivery task failed");
                let result = Err(RelayError::Transport(Box::new(err)));
                let form = self.complete(&token, &result).await;

                (result, form)
            }
        };

        let outcome = match result {
            Ok(_) => SubmitOutcome::Succeeded,
            Err(err) => SubmitOutcome::Failed(err),
        };

        SubmitReport {
            outcome: Ok(outcome),
            form,
        }
    }

    pub async fn acknowledge(&self, token: &str) -> (bool, FormSnapshot) {
        let mut forms = self.forms.lock().await;
        self.prune(&mut forms);

        let (token, entry) = self.open(&mut forms, token);
        let acknowledged = entry.form.acknowledge();

        (acknowledged, snapshot(&token, &entry.form))
    }

    // Known tokens are reused; anything else gets a new form under a new token.
    fn open<'a>(
        &self,
        forms: &'a mut HashMap<String, Entry>,
        token: &str,
    ) -> (String, &'a mut Entry) {
        let token = if forms.contains_key(token) {
            token.to_owned()
        } else {
            self.make_room(forms);
            Ulid::new().to_string()
        };

        let entry = forms.entry(token.clone()).or_insert_with(|| Entry {
            form: ContactForm::new(self.site_name.as_ref()),
            touched: Instant::now(),
        });
        entry.touched = Instant::now();

        (token, entry)
    }

    fn make_room(&self, forms: &mut HashMap<String, Entry>) {
        while forms.len() >= self.max_forms {
            let oldest = forms
                .iter()
                .filter(|(_, entry)| entry.form.status() != SubmissionStatus::Submitting)
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(token, _)| token.to_owned());

            let Some(oldest) = oldest else {
                break;
            };

            forms.remove(&oldest);
            tracing::debug!(token = oldest, "contact form evicted");
        }
    }

    fn prune(&self, forms: &mut HashMap<String, Entry>) {
        let before = forms.len();
        forms.retain(|_, entry| {
            let ttl = match entry.form.status() {
                SubmissionStatus::Submitting => self.pending_ttl,
                _ => self.ttl,
            };

            entry.touched.elapsed() < ttl
        });

        let pruned = before - forms.len();
        if pruned > 0 {
            tracing::debug!(pruned, "expired contact forms dropped");
        }
    }
}

fn snapshot(token: &str, form: &ContactForm) -> FormSnapshot {
    FormSnapshot {
        token: token.to_owned(),
        status: form.status(),
        fields: form.fields().clone(),
    }
}
