use crate::{
    api::{ApiClient, Pagination},
    components::layout::{EmptyState, ErrorMessage, LoadingSpinner, Shell},
    utils::format,
};
use leptos::*;

pub fn page_summary(pagination: &Pagination) -> String {
    format!(
        "Page {} of {} ({} employees)",
        pagination.current_page,
        pagination.total_pages.max(1),
        pagination.total_users,
    )
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let page = create_rw_signal(1i64);

    let directory = create_resource(
        move || page.get(),
        move |page| {
            let api = api.clone();
            async move { api.admin_users(page).await }
        },
    );

    let pagination = create_memo(move |_| {
        directory
            .get()
            .and_then(|res| res.ok())
            .map(|dir| dir.pagination)
    });
    let has_prev = move || pagination.get().map(|p| p.has_prev).unwrap_or(false);
    let has_next = move || pagination.get().map(|p| p.has_next).unwrap_or(false);

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Employees"</h2>
                <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                    {move || match directory.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        Some(Ok(dir)) if dir.users.is_empty() => {
                            view! { <EmptyState message="No employees found." /> }.into_view()
                        }
                        Some(Ok(dir)) => view! {
                            <table class="min-w-full divide-y divide-border">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        <th class="px-4 py-3">"Name"</th>
                                        <th class="px-4 py-3">"Email"</th>
                                        <th class="px-4 py-3">"Department"</th>
                                        <th class="px-4 py-3">"Position"</th>
                                        <th class="px-4 py-3">"Leave balance"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {dir.users.into_iter().map(|user| view! {
                                        <tr class="text-sm text-fg">
                                            <td class="px-4 py-3 font-medium">{user.name}</td>
                                            <td class="px-4 py-3 text-fg-muted">{user.email}</td>
                                            <td class="px-4 py-3">{user.department.unwrap_or_else(|| "-".into())}</td>
                                            <td class="px-4 py-3">{user.position.unwrap_or_else(|| "-".into())}</td>
                                            <td class="px-4 py-3">
                                                {user
                                                    .leave_balance
                                                    .map(|days| format::format_day_count(days as i64))
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view(),
                    }}
                </div>
                <div class="flex items-center justify-between">
                    <p class="text-sm text-fg-muted">
                        {move || pagination.get().map(|p| page_summary(&p)).unwrap_or_default()}
                    </p>
                    <div class="flex gap-2">
                        <button
                            class="px-3 py-1.5 rounded-md text-sm border border-border text-fg bg-surface-elevated hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || !has_prev()
                            on:click=move |_| page.update(|p| *p = (*p - 1).max(1))
                        >
                            "Previous"
                        </button>
                        <button
                            class="px-3 py-1.5 rounded-md text-sm border border-border text-fg bg-surface-elevated hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || !has_next()
                            on:click=move |_| page.update(|p| *p += 1)
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
