//! Contact form controller for the studio website.
//!
//! A [`ContactForm`] owns the four text fields of a visitor's message and the
//! [`SubmissionStatus`] lifecycle. Submitting hands a [`RelayPayload`] to a
//! [`Relay`], which forwards it to the third-party form relay. The
//! [`FormRegistry`] keeps one form per page load so that the in-flight gate
//! holds across HTTP requests.

mod form;
mod payload;
mod registry;
mod relay;
mod submission;

pub use form::*;
pub use payload::*;
pub use registry::*;
pub use relay::*;
pub use submission::*;
