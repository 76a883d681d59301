//! The portfolio page: hero, projects, skills, experience, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. It kicks off the project load on mount and
//! hands each section its slice of state; sections own their local UI
//! concerns (filter selection, form fields).

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::experience_timeline::ExperienceTimeline;
use crate::components::hero::Hero;
use crate::components::projects_section::ProjectsSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::skills_section::SkillsSection;
use crate::state::projects::ProjectsState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let projects = RwSignal::new(ProjectsState::default());
    start_project_load(projects);

    view! {
        <div class="portfolio-page">
            <SiteHeader />
            <main class="portfolio-page__main">
                <Hero />
                <ProjectsSection projects=projects />
                <SkillsSection />
                <ExperienceTimeline />
                <ContactSection />
            </main>
            <SiteFooter />
        </div>
    }
}

/// Start the catalog load for this mount of the page.
///
/// The completion is double-guarded: an alive flag cleared in `on_cleanup`
/// keeps a late resolution from writing into a torn-down page, and the load
/// sequence number keeps a superseded load from overwriting a newer one.
fn start_project_load(projects: RwSignal<ProjectsState>) {
    let Some(seq) = projects.try_update(ProjectsState::begin_load) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::catalog::{ProjectSource as _, SeedCatalog};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = SeedCatalog::default().fetch_projects().await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            match loaded {
                Ok(items) => projects.update(|s| s.finish_load(seq, items)),
                Err(err) => match err {},
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    let _ = seq;
}
