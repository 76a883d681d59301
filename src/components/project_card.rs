//! Project card and its loading skeleton.
//!
//! A missing `github_url` or `live_url` suppresses the corresponding link
//! rather than rendering a dead affordance.

use leptos::prelude::*;

use crate::state::projects::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        github_url,
        live_url,
        ..
    } = project;

    view! {
        <article class="project-card">
            <div class="project-card__top">
                <h4 class="project-card__title">{title}</h4>
                <div class="project-card__links">
                    {github_url.map(|href| {
                        view! {
                            <a
                                class="project-card__link"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Source on GitHub"
                            >
                                "GitHub"
                            </a>
                        }
                    })}
                    {live_url.map(|href| {
                        view! {
                            <a
                                class="project-card__link"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Live deployment"
                            >
                                "Live"
                            </a>
                        }
                    })}
                </div>
            </div>
            <p class="project-card__description">{description}</p>
            <div class="project-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

/// Placeholder card shown while the catalog load is in flight.
#[component]
pub fn ProjectSkeleton() -> impl IntoView {
    view! {
        <div class="project-card project-card--skeleton" aria-hidden="true">
            <div class="skeleton-line skeleton-line--title"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line skeleton-line--short"></div>
            <div class="project-card__tags">
                <span class="skeleton-chip"></span>
                <span class="skeleton-chip"></span>
            </div>
        </div>
    }
}
