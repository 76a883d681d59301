//! Mailto fallback composition and navigation.
//!
//! DESIGN
//! ======
//! The draft is a pure formatting function of the contact message,
//! independent of the submission outcome: the composed URI is the safety
//! net that keeps a message reachable even when the relay is down.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use crate::state::contact::ContactMessage;
use crate::state::profile::CONTACT_EMAIL;

/// Percent-encode a string for use as a `mailto:` header value.
///
/// Unreserved characters and `@` pass through (RFC 6068 allows `@` in
/// header values); everything else is escaped bytewise as UTF-8.
pub fn encode_header_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'@' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Build the pre-filled mail draft for a contact message: fixed recipient,
/// subject derived from the sender's name, body carrying the message text
/// and the reply address.
pub fn compose_contact_mailto(message: &ContactMessage) -> String {
    let subject = format!("Portfolio Contact from {}", message.name);
    let body = format!("{}\n\nFrom: {}", message.message, message.email);
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        encode_header_value(&subject),
        encode_header_value(&body),
    )
}

/// Navigate the browser to a `mailto:` URI, opening the user's mail client.
pub fn open_mail_client(uri: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(uri);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = uri;
    }
}
