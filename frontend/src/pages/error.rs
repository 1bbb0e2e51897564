use leptos::*;
use leptos_router::*;
use shared::RouteError;

/// Landing page for routes that have no content yet, "About Us" included.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let location = use_location();
    let message = move || error_message(&location.pathname.get());

    view! {
        <div class="container error-page">
            <h1>"Nothing here yet"</h1>
            <p>{message}</p>
            <A href="/" class="btn btn-outline">"Back to home"</A>
        </div>
    }
}

fn error_message(path: &str) -> String {
    match path.parse::<shared::Route>() {
        Ok(shared::Route::Error) => "This page is still being written.".to_string(),
        Ok(route) => format!("{} has nothing to show here.", route),
        Err(RouteError::Unknown(path)) => format!("There is no page at {}.", path),
    }
}
