//! Checklist Frontend Entry Point

mod storage;
mod context;
mod components;
mod app;

use app::App;
use checklist_core::ChecklistConfig;
use leptos::prelude::*;

/// Defaults with `?template=fork&log=debug` style overrides
fn load_config() -> ChecklistConfig {
    let config = ChecklistConfig::default();
    let Some(params) = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
    else {
        return config;
    };

    ChecklistConfig::QUERY_PARAMS
        .iter()
        .fold(config, |config, name| match params.get(name) {
            Some(value) => config.with_param(name, &value),
            None => config,
        })
}

fn main() {
    console_error_panic_hook::set_once();

    let config = load_config();
    if let Err(e) = console_logger::init_logger("Checklist", config.level_filter()) {
        web_sys::console::error_1(&format!("failed to init logger: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
