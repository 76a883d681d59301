//! Contact relay call.
//!
//! Browser builds POST the message to the form-relay service via `gloo-net`;
//! native builds stub out with an error since there is no fetch available.
//!
//! ERROR HANDLING
//! ==============
//! A single best-effort attempt: any 2xx counts as delivered, anything else
//! (network error, non-2xx status, serialization error) comes back as an
//! error string for the caller to absorb. No retry, no backoff.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::ContactMessage;
#[cfg(any(test, feature = "csr"))]
use crate::state::profile::CONTACT_EMAIL;

#[cfg(any(test, feature = "csr"))]
fn relay_endpoint() -> String {
    format!("https://formsubmit.co/ajax/{CONTACT_EMAIL}")
}

#[cfg(any(test, feature = "csr"))]
fn relay_subject(name: &str) -> String {
    format!("New Portfolio Contact - {name}")
}

#[cfg(any(test, feature = "csr"))]
fn relay_failed_message(status: u16) -> String {
    format!("relay responded with status {status}")
}

/// JSON body the relay expects. The underscored fields are service
/// directives, not message content.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, serde::Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: String,
    #[serde(rename = "_captcha")]
    captcha: &'static str,
}

#[cfg(any(test, feature = "csr"))]
impl<'a> RelayPayload<'a> {
    fn for_message(message: &'a ContactMessage) -> Self {
        Self {
            name: &message.name,
            email: &message.email,
            message: &message.message,
            subject: relay_subject(&message.name),
            captcha: "false",
        }
    }
}

/// Submit a contact message to the relay. Callers are expected to have
/// validated the message as complete.
///
/// # Errors
///
/// Returns a description of the failure when the request cannot be built or
/// sent, or when the relay responds with a non-2xx status.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = RelayPayload::for_message(message);
        let resp = gloo_net::http::Request::post(&relay_endpoint())
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(relay_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        Err("not available outside the browser".to_owned())
    }
}
