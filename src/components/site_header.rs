//! Sticky site header with identity, theme toggle, and contact shortcut.

use leptos::prelude::*;

use crate::state::profile::profile;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let owner = profile();

    view! {
        <header class="site-header">
            <div class="site-header__identity">
                <h1 class="site-header__name">{owner.name}</h1>
                <p class="site-header__role">{owner.role}</p>
            </div>
            <nav class="site-header__nav">
                <button
                    class="btn site-header__theme-toggle"
                    on:click=move |_| {
                        let next = dark_mode::toggle(ui.get().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <a class="btn btn--primary site-header__contact" href="#contact">
                    "Get In Touch"
                </a>
            </nav>
        </header>
    }
}
