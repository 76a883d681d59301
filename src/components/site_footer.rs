//! Page footer.

use leptos::prelude::*;

use crate::state::profile::profile;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let owner = profile();

    view! {
        <footer class="site-footer">
            <p class="site-footer__note">
                {format!("© {} · Crafted with Rust, Leptos & WebAssembly", owner.name)}
            </p>
        </footer>
    }
}
