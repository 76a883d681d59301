//! CSR entry point. Trunk builds this binary to WebAssembly with the
//! `csr` feature enabled; without it, there is nothing to mount.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(portfolio::app::App);
    }
}
