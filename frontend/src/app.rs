use leptos::*;
use leptos_router::*;
use shared::{Navigator, DEFAULT_USERNAME};

use crate::auth::{use_auth, AuthState};
use crate::components::navbar::Navbar;
use crate::config::{provide_site_config, SiteConfig};
use crate::navigation::RouterNavigator;
use crate::pages::{error::ErrorPage, home::Home, login::Login};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(AuthState::new());
    provide_site_config(config);

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SiteLayout>
                        <Route path="" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/error" view=ErrorPage />
                        <Route path="/*any" view=ErrorPage />
                    </Route>
                </Routes>
            </main>
        </Router>
    }
}

/// Navbar on top of every page, wired to the session context.
#[component]
fn SiteLayout() -> impl IntoView {
    let auth_state = use_auth();
    let navigator = RouterNavigator::from_router();

    let is_logged_in = Signal::derive(move || auth_state.is_authenticated());
    let username = Signal::derive(move || {
        auth_state
            .user_name()
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string())
    });
    let on_login = Callback::new(move |_: ()| navigator.navigate(shared::Route::Login));
    let on_logout = Callback::new(move |_: ()| auth_state.logout());

    view! {
        <Navbar
            is_logged_in=is_logged_in
            username=username
            on_login=on_login
            on_logout=on_logout
        />
        <div class="container">
            <Outlet />
        </div>
    }
}
