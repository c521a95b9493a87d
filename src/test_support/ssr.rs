use leptos::*;

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view to its SSR string with resource loading suppressed, so
/// pages exercise their loading branch instead of firing real requests.
/// The runtime is owned by the framework renderer.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = leptos::ssr::render_to_string(view).to_string();
    leptos_reactive::suppress_resource_load(false);
    html
}
