//! Login Page
//!
//! Email/password form. Authentication failures are shown inline; nothing
//! else renders until the portal hands back a token.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Login form component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (auth_error, set_auth_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_auth_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(token) => {
                    state.set_token(token);
                    state.show_success("Logged in");
                }
                Err(e) => {
                    set_auth_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <form
                on:submit=on_submit
                class="bg-gray-800 rounded-xl p-8 w-full max-w-md space-y-4"
            >
                <div class="text-center mb-2">
                    <div class="text-4xl mb-2">"🔐"</div>
                    <h1 class="text-2xl font-bold">"Sign in"</h1>
                    <p class="text-gray-400 text-sm mt-1">
                        "Job-portal analytics are available after login"
                    </p>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Inline authentication failure
                {move || {
                    auth_error.get().map(|msg| view! {
                        <p class="text-red-400 text-sm">{msg}</p>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
