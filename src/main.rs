//! Application bootstrap: logging, config, and DOM mount.

fn main() {
    #[cfg(feature = "csr")]
    boot();
}

/// Wire the app together and mount it under the `#app` anchor.
///
/// Runs exactly once per page load; a missing anchor is fatal.
#[cfg(feature = "csr")]
fn boot() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use waypost::app::App;
    use waypost::config::ApiConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ApiConfig::from_env();
    log::info!("starting waypost against {}", config.base_url());

    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount anchor");
    let anchor: web_sys::HtmlElement = anchor.unchecked_into();

    leptos::mount::mount_to(anchor, move || view! { <App config=config/> }).forget();
}
