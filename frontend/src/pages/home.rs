use leptos::*;

use crate::auth::use_auth;

#[component]
pub fn Home() -> impl IntoView {
    let auth_state = use_auth();

    let greeting = move || match auth_state.user_name() {
        Some(name) if auth_state.is_authenticated() => format!("Welcome back, {}!", name),
        _ => "Welcome!".to_string(),
    };

    view! {
        <div class="container home">
            <h1>{greeting}</h1>
            <p>"Open the menu for the rules, or sign in to start playing."</p>
        </div>
    }
}
