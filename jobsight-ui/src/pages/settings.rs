//! Settings Page
//!
//! Portal API connection configuration.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the portal connection"</p>
            </div>

            <ApiSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        // A new base means the cached collections are stale
        state.invalidate();
        state.show_success("API URL saved");
    };

    let reset_url = move |_| {
        api::set_api_base(api::DEFAULT_API_BASE);
        set_api_url.set(api::DEFAULT_API_BASE.to_string());
        state.invalidate();
        state.show_success("API URL reset to default");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Portal API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                        <button
                            on:click=reset_url
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500
                                   rounded-lg font-medium transition-colors"
                        >
                            "Reset"
                        </button>
                    </div>
                </div>

                <p class="text-sm text-gray-500">
                    {format!("Default: {}", api::DEFAULT_API_BASE)}
                </p>
            </div>
        </section>
    }
}
