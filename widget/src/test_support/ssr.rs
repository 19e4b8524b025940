use leptos::*;

/// Runs `f` inside a throwaway reactive runtime and disposes it afterwards,
/// so tests can create signals without leaking between each other.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
