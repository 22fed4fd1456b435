//! Browser entry point. Built for wasm32 via trunk with the `web` feature.

fn main() {
    #[cfg(feature = "web")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(safeplate::app::App);
    }

    #[cfg(not(feature = "web"))]
    eprintln!("safeplate is a browser application; build it with `trunk serve` (enables the `web` feature)");
}
