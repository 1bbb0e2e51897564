use leptos::*;
use shared::{validate_name, Navigator, Route, User};

use crate::auth::use_auth;
use crate::components::button::{Button, ButtonVariant};
use crate::navigation::RouterNavigator;

#[component]
pub fn Login() -> impl IntoView {
    let auth_state = use_auth();
    let navigator = RouterNavigator::from_router();

    let name = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_name(&name.get()) {
            Ok(valid) => {
                error.set(None);
                auth_state.sign_in(User::new(valid));
                navigator.navigate(Route::Home);
            }
            Err(e) => {
                log::debug!("sign-in rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card card">
                <div class="auth-header">
                    <h1 class="auth-title">"Welcome"</h1>
                    <p class="auth-subtitle">"Pick a name to sign in"</p>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label" for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            class="form-input"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <Button
                        variant=ButtonVariant::Primary
                        button_type="submit"
                        class="auth-submit"
                    >
                        "Sign In"
                    </Button>
                </form>
            </div>
        </div>
    }
}
