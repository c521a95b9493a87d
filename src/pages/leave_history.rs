use crate::{
    api::{ApiClient, LeaveRequest, LeaveStatus},
    components::{
        cards::StatusBadge,
        layout::{EmptyState, ErrorMessage, LoadingSpinner, Shell},
    },
    utils::format,
};
use leptos::*;

pub fn can_cancel(request: &LeaveRequest) -> bool {
    request.status == LeaveStatus::Pending
}

#[component]
pub fn LeaveHistoryPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let error = create_rw_signal(None::<String>);

    let api_for_list = api.clone();
    let requests = create_resource(
        || (),
        move |_| {
            let api = api_for_list.clone();
            async move { api.my_leave_requests().await }
        },
    );

    let cancel_action = create_action(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move { api.cancel_leave_request(&id).await }
    });
    let cancel_pending = cancel_action.pending();

    create_effect(move |_| {
        if let Some(result) = cancel_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    requests.refetch();
                }
                Err(err) => error.set(Some(err.message)),
            }
        }
    });

    let on_cancel = move |id: String| {
        if cancel_pending.get_untracked() {
            return;
        }
        cancel_action.dispatch(id);
    };

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Leave History"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>
                <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                    {move || match requests.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        Some(Ok(list)) if list.is_empty() => {
                            view! { <EmptyState message="You have not requested any leave yet." /> }.into_view()
                        }
                        Some(Ok(list)) => view! {
                            <table class="min-w-full divide-y divide-border">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        <th class="px-4 py-3">"Type"</th>
                                        <th class="px-4 py-3">"Dates"</th>
                                        <th class="px-4 py-3">"Days"</th>
                                        <th class="px-4 py-3">"Status"</th>
                                        <th class="px-4 py-3">"Requested"</th>
                                        <th class="px-4 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {list.into_iter().map(|request| {
                                        let id = request.id.clone();
                                        let cancellable = can_cancel(&request);
                                        view! {
                                            <tr class="text-sm text-fg">
                                                <td class="px-4 py-3">{request.leave_type.label()}</td>
                                                <td class="px-4 py-3">
                                                    {format!(
                                                        "{} to {}",
                                                        format::format_date(request.start_date),
                                                        format::format_date(request.end_date),
                                                    )}
                                                </td>
                                                <td class="px-4 py-3">{request.days}</td>
                                                <td class="px-4 py-3"><StatusBadge status=request.status /></td>
                                                <td class="px-4 py-3 text-fg-muted">
                                                    {format::format_date_time(request.created_at)}
                                                </td>
                                                <td class="px-4 py-3 text-right">
                                                    <Show when=move || cancellable>
                                                        {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    class="text-status-error-text hover:underline text-sm disabled:opacity-50"
                                                                    disabled=move || cancel_pending.get()
                                                                    on:click=move |_| on_cancel(id.clone())
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view(),
                    }}
                </div>
            </div>
        </Shell>
    }
}
