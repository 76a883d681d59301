use super::*;

fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        message: "hi".to_owned(),
    }
}

#[test]
fn relay_endpoint_targets_the_contact_email() {
    let endpoint = relay_endpoint();
    assert!(endpoint.starts_with("https://formsubmit.co/ajax/"));
    assert!(endpoint.ends_with(CONTACT_EMAIL));
}

#[test]
fn relay_subject_is_derived_from_the_sender_name() {
    assert_eq!(relay_subject("A"), "New Portfolio Contact - A");
}

#[test]
fn relay_failed_message_carries_the_status() {
    assert_eq!(relay_failed_message(503), "relay responded with status 503");
}

#[test]
fn relay_payload_serializes_with_service_directives() {
    let message = sample_message();
    let value = serde_json::to_value(RelayPayload::for_message(&message)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "message": "hi",
            "_subject": "New Portfolio Contact - A",
            "_captcha": "false",
        })
    );
}
