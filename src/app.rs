//! Root application component.
//!
//! Provides shared UI chrome context, applies the stored theme before the
//! first paint, and renders the single page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::portfolio::PortfolioPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    let ui = RwSignal::new(UiState { dark_mode: dark });
    provide_context(ui);

    view! {
        <Title text="Pratham Gupta · Java Full-Stack Developer" />
        <PortfolioPage />
    }
}
