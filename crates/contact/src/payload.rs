use serde::{Deserialize, Serialize};

use crate::ContactSubmission;

/// Value sent in place of an empty company field.
pub const COMPANY_NOT_PROVIDED: &str = "Not provided";

/// JSON body posted to the form relay.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl RelayPayload {
    pub fn new(submission: &ContactSubmission, site_name: &str) -> Self {
        let company = if submission.company.is_empty() {
            COMPANY_NOT_PROVIDED.to_owned()
        } else {
            submission.company.to_owned()
        };

        Self {
            subject: format!(
                "New Contact from {} - {site_name} Website",
                submission.name
            ),
            name: submission.name.to_owned(),
            email: submission.email.to_owned(),
            company,
            message: submission.message.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_company_becomes_sentinel() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            company: String::new(),
            message: "Need an AI audit".to_owned(),
        };

        let payload = RelayPayload::new(&submission, "Xu Studio");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "company": "Not provided",
                "message": "Need an AI audit",
                "_subject": "New Contact from Jane Doe - Xu Studio Website",
            })
        );
    }

    #[test]
    fn entered_company_is_sent_verbatim() {
        let submission = ContactSubmission {
            name: "Sam".to_owned(),
            email: "sam@acme.io".to_owned(),
            company: " Acme ".to_owned(),
            message: "Hello".to_owned(),
        };

        let payload = RelayPayload::new(&submission, "Xu Studio");
        assert_eq!(payload.company, " Acme ");
    }
}
