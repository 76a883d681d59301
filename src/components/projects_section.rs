//! Project showcase grid.

use leptos::prelude::*;

use crate::components::project_card::{ProjectCard, ProjectSkeleton};
use crate::state::projects::{LOADING_PLACEHOLDER_COUNT, ProjectsState};

#[component]
pub fn ProjectsSection(projects: RwSignal<ProjectsState>) -> impl IntoView {
    view! {
        <section id="projects" class="projects-section">
            <h3 class="section-heading">
                "Featured " <span class="accent">"Projects"</span>
            </h3>
            <div class="projects-section__grid">
                {move || {
                    projects
                        .get()
                        .items
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || projects.get().loading>
                    {(0..LOADING_PLACEHOLDER_COUNT)
                        .map(|_| view! { <ProjectSkeleton /> })
                        .collect::<Vec<_>>()}
                </Show>
            </div>
        </section>
    }
}
