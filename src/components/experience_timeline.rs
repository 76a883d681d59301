//! Professional journey timeline.

use leptos::prelude::*;

use crate::state::experience::{ExperienceEntry, experience_entries};

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section class="experience-section">
            <h3 class="section-heading">
                "Professional " <span class="accent">"Journey"</span>
            </h3>
            <div class="experience-section__timeline">
                {experience_entries()
                    .into_iter()
                    .map(|entry| view! { <TimelineItem entry=entry /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: ExperienceEntry) -> impl IntoView {
    let ExperienceEntry {
        years,
        title,
        location,
        description,
        technologies,
    } = entry;

    view! {
        <div class="timeline-item">
            <div class="timeline-item__marker" aria-hidden="true"></div>
            <div class="timeline-item__body">
                <span class="timeline-item__years">{years}</span>
                <h5 class="timeline-item__title">{title}</h5>
                <span class="timeline-item__location">{location}</span>
                <p class="timeline-item__description">{description}</p>
                <div class="timeline-item__technologies">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tag">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
