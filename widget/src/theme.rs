//! Theme tokens are pass-through styling: the demo only mirrors the OS
//! preference onto the root element so the token palette can react to it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn from_media(matches: bool) -> Self {
        if matches {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::Theme;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    fn apply(theme: Theme) {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let list = html.class_list();
        match theme {
            Theme::Dark => {
                let _ = list.add_1(Theme::Dark.as_class());
            }
            Theme::Light => {
                let _ = list.remove_1(Theme::Dark.as_class());
            }
        }
    }

    pub fn init() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(media) = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
        else {
            apply(Theme::Light);
            return;
        };

        apply(Theme::from_media(media.matches()));

        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            apply(Theme::from_media(event.matches()));
        }) as Box<dyn FnMut(_)>);
        let _ = media.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init as init_system_theme;

#[cfg(not(target_arch = "wasm32"))]
pub fn init_system_theme() {}
