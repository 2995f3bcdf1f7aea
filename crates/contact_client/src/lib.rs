//! Contact form submission for the studio site.
//!
//! A [`SubmissionController`] owns one form's values and its
//! [`SubmissionStatus`](shared::domain::SubmissionStatus), posts the form as
//! JSON through a [`ContactTransport`] and never lets two requests for the
//! same form overlap.

mod controller;
pub mod error;
pub mod transport;
mod view;

pub use controller::{
    SubmissionConfig, SubmissionController, SubmitOutcome, DEFAULT_CONTACT_ENDPOINT,
    DEFAULT_RESET_AFTER, SUBMISSION_FAILED_MESSAGE,
};
pub use error::DeliveryError;
pub use transport::{ContactTransport, HttpTransport};
pub use view::{ContactFormView, FormNotice, SUCCESS_NOTICE};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
