pub mod components;
pub mod config;
pub mod filter;
pub mod pages;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use filter::panel::DateRangeFilter;
pub use filter::utils::{DateRange, RangeSelection};

#[cfg(target_arch = "wasm32")]
pub fn boot() {
    use leptos::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    web_sys::console::log_1(&"Starting Kikan demo (wasm)".into());

    theme::init_system_theme();

    mount_to_body(|| view! { <pages::home::HomePage/> });
}
