//! Contact section: info cards plus the form driving the submission machine.
//!
//! ERROR HANDLING
//! ==============
//! The relay call is one best-effort attempt absorbed into local state.
//! Whatever the outcome, the composed mailto draft is opened so the message
//! is never lost to an unavailable relay.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::state::contact::{ContactState, SubmissionState};
use crate::state::profile::profile;

/// Inline notice (class, text) for a resolved submission; nothing is shown
/// while idle or in flight.
fn status_notice(status: SubmissionState) -> Option<(&'static str, &'static str)> {
    match status {
        SubmissionState::Success => Some((
            "contact-form__notice contact-form__notice--success",
            "Message sent successfully! I'll get back to you soon.",
        )),
        SubmissionState::Failure => Some((
            "contact-form__notice contact-form__notice--failure",
            "There was an error sending your message. Please try again or email me directly.",
        )),
        SubmissionState::Idle | SubmissionState::Submitting => None,
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let owner = profile();

    #[cfg(feature = "csr")]
    let alive = {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = contact.get();
        let started = contact.try_update(ContactState::begin_submit).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "csr")]
        {
            use std::sync::atomic::Ordering;

            let message = snapshot.message.clone();
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&message).await;
                let draft = crate::util::mailto::compose_contact_mailto(&message);
                if alive_task.load(Ordering::Relaxed) {
                    match outcome {
                        Ok(()) => contact.update(ContactState::submit_succeeded),
                        Err(err) => {
                            leptos::logging::warn!("contact relay failed: {err}");
                            contact.update(ContactState::submit_failed);
                        }
                    }
                }
                // Deliberate: the mail draft opens on success too.
                crate::util::mailto::open_mail_client(&draft);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = snapshot;
    };

    let submitting = move || contact.get().status == SubmissionState::Submitting;

    view! {
        <section id="contact" class="contact-section">
            <h3 class="section-heading">
                "Let's " <span class="accent">"Connect"</span>
            </h3>

            <div class="contact-section__columns">
                <div class="contact-section__info">
                    <h4 class="contact-section__info-title">"Start a Conversation"</h4>
                    <div class="contact-info-card">
                        <div class="contact-info-card__label">"Email"</div>
                        <div class="contact-info-card__value">{owner.email}</div>
                    </div>
                    <div class="contact-info-card">
                        <div class="contact-info-card__label">"Phone"</div>
                        <div class="contact-info-card__value">{owner.phone}</div>
                    </div>
                    <div class="contact-info-card">
                        <div class="contact-info-card__label">"Location"</div>
                        <div class="contact-info-card__value">{owner.location_note}</div>
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    {move || {
                        status_notice(contact.get().status)
                            .map(|(class, text)| view! { <p class=class>{text}</p> })
                    }}

                    <input
                        class="contact-form__input"
                        name="name"
                        placeholder="Your full name"
                        prop:value=move || contact.get().message.name
                        on:input=move |ev| contact.update(|c| c.set_name(event_target_value(&ev)))
                        required=true
                    />
                    <input
                        class="contact-form__input"
                        name="email"
                        type="email"
                        placeholder="Your email address"
                        prop:value=move || contact.get().message.email
                        on:input=move |ev| contact.update(|c| c.set_email(event_target_value(&ev)))
                        required=true
                    />
                    <textarea
                        class="contact-form__input contact-form__message"
                        name="message"
                        rows="6"
                        placeholder="Tell me about your project, opportunity, or just say hello..."
                        prop:value=move || contact.get().message.message
                        on:input=move |ev| contact.update(|c| c.set_message(event_target_value(&ev)))
                        required=true
                    ></textarea>

                    <button class="btn btn--primary contact-form__submit" type="submit" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
