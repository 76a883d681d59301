use super::*;

fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        message: "hi".to_owned(),
    }
}

// =============================================================
// encode_header_value
// =============================================================

#[test]
fn encoding_passes_unreserved_characters_through() {
    assert_eq!(encode_header_value("Abc-123_.~"), "Abc-123_.~");
}

#[test]
fn encoding_keeps_at_sign_literal() {
    assert_eq!(encode_header_value("a@x.com"), "a@x.com");
}

#[test]
fn encoding_escapes_spaces_and_newlines() {
    assert_eq!(encode_header_value("a b"), "a%20b");
    assert_eq!(encode_header_value("a\nb"), "a%0Ab");
}

#[test]
fn encoding_escapes_multibyte_input_bytewise() {
    assert_eq!(encode_header_value("é"), "%C3%A9");
}

#[test]
fn encoding_escapes_query_delimiters() {
    assert_eq!(encode_header_value("a&b=c?d"), "a%26b%3Dc%3Fd");
}

// =============================================================
// compose_contact_mailto
// =============================================================

#[test]
fn composition_targets_the_fixed_recipient() {
    let uri = compose_contact_mailto(&sample_message());
    assert!(uri.starts_with(&format!("mailto:{CONTACT_EMAIL}?")));
}

#[test]
fn composition_derives_the_subject_from_the_sender_name() {
    let uri = compose_contact_mailto(&sample_message());
    assert!(uri.contains("subject=Portfolio%20Contact%20from%20A"));
}

#[test]
fn composition_body_carries_message_and_reply_address() {
    let uri = compose_contact_mailto(&sample_message());
    assert!(uri.contains("hi"));
    assert!(uri.contains("a@x.com"));
    assert!(uri.contains("body=hi%0A%0AFrom%3A%20a@x.com"));
}

#[test]
fn composition_is_non_empty_even_for_an_empty_message() {
    let uri = compose_contact_mailto(&ContactMessage::default());
    assert!(uri.contains("subject="));
    assert!(uri.contains("body="));
}

#[test]
fn composition_is_independent_of_submission_outcome() {
    // Pure function of the message: same input, same draft.
    let first = compose_contact_mailto(&sample_message());
    let second = compose_contact_mailto(&sample_message());
    assert_eq!(first, second);
}
