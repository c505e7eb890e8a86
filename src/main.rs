//! Trunk entry point. Mounts the root component in the browser; the
//! feature-less build compiles to an empty binary so `cargo test` stays
//! native.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(petcare_client::app::App);
    }
}
