//! Dashboard Page
//!
//! Main dashboard view: collection totals and the four count charts. Series
//! are re-derived from the cached snapshot on every render; the snapshot
//! itself is only refetched once its five-minute window has passed.

use leptos::*;

use crate::api;
use crate::components::{BarChart, Loading, PieChart, StatCard, TimelineChart};
use crate::state::global::GlobalState;
use crate::state::series;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch on mount (and on credential change) when the snapshot is stale
    create_effect(move |_| {
        let Some(token) = state.token.get() else {
            return;
        };
        if state.is_fresh() {
            return;
        }

        spawn_local(async move {
            state.loading.set(true);
            let outcome = api::fetch_snapshot(&token).await;
            if let Some(message) = outcome.warning_summary() {
                state.show_error(&message);
            }
            state.store_snapshot(outcome.snapshot);
            state.loading.set(false);
        });
    });

    let users_total = Signal::derive(move || {
        state.snapshot.get().map(|s| s.users.len()).unwrap_or(0)
    });
    let jobs_total = Signal::derive(move || {
        state.snapshot.get().map(|s| s.jobs.len()).unwrap_or(0)
    });
    let applications_total = Signal::derive(move || {
        state
            .snapshot
            .get()
            .map(|s| s.applications.len())
            .unwrap_or(0)
    });

    let roles = Signal::derive(move || {
        state
            .snapshot
            .get()
            .map(|s| series::users_by_role(&s.users))
            .unwrap_or_default()
    });
    let types = Signal::derive(move || {
        state
            .snapshot
            .get()
            .map(|s| series::jobs_by_type(&s.jobs))
            .unwrap_or_default()
    });
    let companies = Signal::derive(move || {
        state
            .snapshot
            .get()
            .map(|s| series::applications_per_company(&s.applications))
            .unwrap_or_default()
    });
    let timeline = Signal::derive(move || {
        state
            .snapshot
            .get()
            .map(|s| series::applications_per_day(&s.applications))
            .unwrap_or_default()
    });

    let refresh = move |_| {
        let Some(token) = state.token.get_untracked() else {
            return;
        };
        // Explicit refresh skips the TTL window
        state.invalidate();
        spawn_local(async move {
            state.loading.set(true);
            let outcome = api::fetch_snapshot(&token).await;
            if let Some(message) = outcome.warning_summary() {
                state.show_error(&message);
            }
            state.store_snapshot(outcome.snapshot);
            state.loading.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Job-Portal Analytics"</h1>
                    <p class="text-gray-400 mt-1">"Users, jobs and applications at a glance"</p>
                </div>

                <button
                    on:click=refresh
                    disabled=move || state.loading.get()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if state.loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            // Spinner until the first fetch lands, data sections after
            {move || {
                if state.loading.get() && state.snapshot.get().is_none() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        // Totals row
                        <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <StatCard label="Users" icon="👥" value=users_total />
                            <StatCard label="Jobs" icon="💼" value=jobs_total />
                            <StatCard label="Applications" icon="📨" value=applications_total />
                        </section>

                        // Charts
                        <div class="grid md:grid-cols-2 gap-8">
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"Users by Role"</h2>
                                <PieChart series=roles />
                            </section>

                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"Jobs by Type"</h2>
                                <BarChart series=types />
                            </section>
                        </div>

                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Applications per Company"</h2>
                            <BarChart series=companies horizontal=true />
                        </section>

                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Applications Over Time"</h2>
                            <TimelineChart series=timeline />
                        </section>
                    }.into_view()
                }
            }}
        </div>
    }
}
