use leptos::*;

pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Fires `on_outside` for every mousedown whose target is not inside the
/// referenced element. The listener is removed when the owning scope is
/// disposed. Server rendering has no document, so this is a no-op there.
#[cfg(target_arch = "wasm32")]
pub fn on_outside_mousedown(target: NodeRef<html::Div>, on_outside: impl Fn() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .and_then(|node| {
                target
                    .get_untracked()
                    .map(|root| root.contains(Some(&node)))
            })
            .unwrap_or(false);
        if !inside {
            on_outside();
        }
    }) as Box<dyn FnMut(_)>);

    if document
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    on_cleanup(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_outside_mousedown(_target: NodeRef<html::Div>, _on_outside: impl Fn() + 'static) {}
