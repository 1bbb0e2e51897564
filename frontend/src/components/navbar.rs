use leptos::*;
use shared::{run_effect, NavAction, NavHandlers, NavState, PanelAccount, TopBarButton};

use crate::auth::use_auth;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icon_button::IconButton;
use crate::components::rules_modal::RulesModal;
use crate::config::use_site_config;
use crate::navigation::RouterNavigator;

/// Optional callbacks handed to the navbar by its parent.
#[derive(Clone, Copy, Default)]
struct PropHandlers {
    on_login: Option<Callback<()>>,
    on_logout: Option<Callback<()>>,
    on_open_rules: Option<Callback<()>>,
}

impl NavHandlers for PropHandlers {
    fn login(&self) {
        if let Some(callback) = self.on_login {
            callback.call(());
        }
    }

    fn logout(&self) {
        if let Some(callback) = self.on_logout {
            callback.call(());
        }
    }

    fn open_rules(&self) {
        if let Some(callback) = self.on_open_rules {
            callback.call(());
        }
    }
}

impl PropHandlers {
    /// The parent owns the rules dialog only when it passed a callback for it.
    fn rules_action(&self) -> NavAction {
        NavAction::Rules {
            external: self.on_open_rules.is_some(),
        }
    }
}

/// Top bar with a hamburger-triggered slide-out panel.
///
/// The account button in the top bar reflects the auth context, while the
/// account block inside the panel follows the `is_logged_in`/`username` props.
/// When `on_open_rules_modal` is set the parent owns the rules dialog;
/// otherwise the navbar shows its own.
#[component]
pub fn Navbar(
    #[prop(optional, into)] is_logged_in: MaybeSignal<bool>,
    #[prop(optional, into)] username: Option<MaybeSignal<String>>,
    #[prop(optional)] on_login: Option<Callback<()>>,
    #[prop(optional)] on_logout: Option<Callback<()>>,
    #[prop(optional)] on_open_rules_modal: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth();
    let config = use_site_config();
    let navigator = RouterNavigator::from_router();
    let handlers = PropHandlers {
        on_login,
        on_logout,
        on_open_rules: on_open_rules_modal,
    };
    let rules_action = handlers.rules_action();

    let state = create_rw_signal(NavState::new());

    let dispatch = Callback::new(move |action: NavAction| {
        log::debug!("navbar: {:?}", action);
        if let Some(effect) = state.try_update(|nav| nav.dispatch(action)).flatten() {
            run_effect(effect, &navigator, &handlers);
        }
    });
    let toggle_menu =
        Callback::new(move |_: ev::MouseEvent| dispatch.call(NavAction::ToggleMenu));
    let about_us = Callback::new(move |_: ev::MouseEvent| dispatch.call(NavAction::AboutUs));
    let open_rules = Callback::new(move |_: ev::MouseEvent| dispatch.call(rules_action));
    let close_rules = Callback::new(move |_: ()| dispatch.call(NavAction::CloseRules));

    let menu_open = Signal::derive(move || state.with(|nav| nav.menu_open));
    let rules_visible = move || state.with(|nav| nav.rules_visible);
    let panel_account = Signal::derive(move || {
        PanelAccount::from_props(is_logged_in.get(), username.as_ref().map(|name| name.get()))
    });

    let account_button = move || {
        let button = TopBarButton::for_auth(&auth);
        match button.action {
            Some(action) => view! {
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Wide
                    class="navbar-account"
                    on_click=Callback::new(move |_: ev::MouseEvent| dispatch.call(action))
                >
                    {button.label}
                </Button>
            }
            .into_view(),
            None => view! {
                <Button variant=ButtonVariant::Outline size=ButtonSize::Wide class="navbar-account">
                    {button.label}
                </Button>
            }
            .into_view(),
        }
    };

    let panel_account_view = move || {
        let account = panel_account.get();
        let label = account.button_label();
        let action = account.button_action();
        let name = match account {
            PanelAccount::SignedIn { username } => Some(view! {
                <div class="nav-panel-username">{username}</div>
            }),
            PanelAccount::SignedOut => None,
        };

        view! {
            {name}
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Panel
                class="nav-panel-account"
                on_click=Callback::new(move |_: ev::MouseEvent| dispatch.call(action))
            >
                {label}
            </Button>
        }
    };

    let hamburger_icon = config.hamburger_icon;
    let close_icon = config.close_icon;

    view! {
        <div class="navbar">
            <div class="navbar-top">
                <IconButton
                    icon=hamburger_icon
                    alt="hamburger menu"
                    class="nav-hamburger"
                    expanded=menu_open
                    on_click=toggle_menu
                />
                <div class="navbar-account-slot">{account_button}</div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-overlay">
                    <aside class="nav-panel">
                        <IconButton
                            icon=close_icon.clone()
                            alt="Close menu"
                            class="nav-panel-close"
                            on_click=toggle_menu
                        />
                        <div class="nav-panel-account-slot">{panel_account_view}</div>
                        <div class="nav-panel-item">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Panel
                                on_click=about_us
                            >
                                "About Us"
                            </Button>
                        </div>
                        <div class="nav-panel-item">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Panel
                                on_click=open_rules
                            >
                                "Rules"
                            </Button>
                        </div>
                    </aside>
                    <div
                        class="nav-backdrop"
                        on:click=move |ev| toggle_menu.call(ev)
                    ></div>
                </div>
            </Show>
            <Show when=rules_visible>
                <RulesModal on_close=close_rules />
            </Show>
        </div>
    }
}
