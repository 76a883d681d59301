//! Hero section: headline, contact links, résumé download, and stats.

use leptos::prelude::*;

use crate::state::profile::{Stat, profile};

#[component]
pub fn Hero() -> impl IntoView {
    let owner = profile();
    let phone_href = format!("tel:{}", owner.phone.replace(' ', ""));
    let mailto_href = format!("mailto:{}", owner.email);

    view! {
        <section class="hero">
            <p class="hero__availability">{owner.availability}</p>

            <h2 class="hero__headline">
                "Crafting " <span class="accent">"Digital"</span> " Excellence"
            </h2>

            <p class="hero__tagline">{owner.tagline}</p>

            <div class="hero__actions">
                <a class="btn btn--primary hero__cta" href="#projects">
                    "Explore My Work"
                </a>
                <a
                    class="btn hero__resume"
                    href=owner.resume_href
                    download=owner.resume_filename
                >
                    "Download Resume"
                </a>
            </div>

            <div class="hero__contact-links">
                <a class="hero__contact-link" href=phone_href>{owner.phone}</a>
                <a class="hero__contact-link" href=mailto_href>{owner.email}</a>
                <a class="hero__contact-link" href=owner.linkedin_url>"LinkedIn"</a>
            </div>

            <div class="hero__stats">
                {owner
                    .stats
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__value">{stat.value}</div>
            <div class="stat-card__label">{stat.label}</div>
        </div>
    }
}
