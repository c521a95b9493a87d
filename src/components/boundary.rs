use leptos::*;

/// Supervises the routed content subtree: a rendering failure inside it is
/// swapped for a recoverable panel with a manual reset, while everything
/// outside the boundary keeps rendering.
#[component]
pub fn ContentBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-5 rounded space-y-3">
                <p class="font-bold">"Something went wrong while rendering this page."</p>
                <ul class="list-disc list-inside text-sm">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()}
                </ul>
                <button
                    class="inline-flex items-center px-4 py-2 border border-status-error-border text-sm font-medium rounded hover:bg-status-error-bg"
                    on:click=move |_| errors.set(Errors::default())
                >
                    "Try again"
                </button>
            </div>
        }>
            {children()}
        </ErrorBoundary>
    }
}
