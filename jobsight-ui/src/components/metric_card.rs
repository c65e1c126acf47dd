//! Stat Card Component
//!
//! Displays one collection total.

use leptos::*;

/// Collection total card
#[component]
pub fn StatCard(
    /// Collection name to display
    label: &'static str,
    /// Icon shown next to the label
    icon: &'static str,
    #[prop(into)] value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || value.get().to_string()}
            </div>
        </div>
    }
}
