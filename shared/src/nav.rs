//! Click handling for the site navigation bar.
//!
//! Every click is turned into a [`NavAction`], applied to [`NavState`] and
//! may yield one [`NavEffect`] for the caller to carry out. Nothing here
//! touches the DOM, so the whole interaction model is testable natively.

use crate::routes::{Navigator, Route};
use crate::types::{AuthProvider, ANONYMOUS_NAME, DEFAULT_USERNAME};

pub const SIGN_IN_LABEL: &str = "Sign In /Login";

/// Local UI state of the navbar. Both flags start out false on mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub rules_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Hamburger, panel close icon and backdrop all toggle the menu.
    ToggleMenu,
    GoToLogin,
    PanelLogin,
    PanelLogout,
    AboutUs,
    /// `external` is true when the caller owns the rules dialog.
    Rules { external: bool },
    CloseRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    Navigate(Route),
    Login,
    Logout,
    OpenRulesModal,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Applies one click and returns what the caller still has to do.
    pub fn dispatch(&mut self, action: NavAction) -> Option<NavEffect> {
        match action {
            NavAction::ToggleMenu => {
                self.toggle_menu();
                None
            }
            NavAction::GoToLogin => Some(NavEffect::Navigate(Route::Login)),
            NavAction::PanelLogin => Some(NavEffect::Login),
            NavAction::PanelLogout => Some(NavEffect::Logout),
            NavAction::AboutUs => Some(NavEffect::Navigate(Route::Error)),
            NavAction::Rules { external } => {
                // The rules overlay only ever opens together with the menu closing.
                self.menu_open = false;
                if external {
                    Some(NavEffect::OpenRulesModal)
                } else {
                    self.rules_visible = true;
                    None
                }
            }
            NavAction::CloseRules => {
                self.rules_visible = false;
                None
            }
        }
    }
}

/// Caller-supplied handlers for the delegated panel actions.
///
/// Every method defaults to a no-op so a missing callback degrades silently.
pub trait NavHandlers {
    fn login(&self) {}
    fn logout(&self) {}
    fn open_rules(&self) {}
}

pub fn run_effect(effect: NavEffect, navigator: &impl Navigator, handlers: &impl NavHandlers) {
    match effect {
        NavEffect::Navigate(route) => navigator.navigate(route),
        NavEffect::Login => handlers.login(),
        NavEffect::Logout => handlers.logout(),
        NavEffect::OpenRulesModal => handlers.open_rules(),
    }
}

/// The account button on the right of the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBarButton {
    pub label: String,
    /// `None` when clicking does nothing.
    pub action: Option<NavAction>,
}

impl TopBarButton {
    pub fn for_auth(auth: &impl AuthProvider) -> Self {
        if auth.is_logged_in() {
            let label = auth
                .get_user()
                .map(|user| user.name)
                .unwrap_or_else(|| ANONYMOUS_NAME.to_string());
            Self {
                label,
                action: None,
            }
        } else {
            Self {
                label: SIGN_IN_LABEL.to_string(),
                action: Some(NavAction::GoToLogin),
            }
        }
    }
}

/// Account block inside the slide-out panel.
///
/// Driven by the navbar's props rather than the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAccount {
    SignedIn { username: String },
    SignedOut,
}

impl PanelAccount {
    pub fn from_props(is_logged_in: bool, username: Option<String>) -> Self {
        if is_logged_in {
            PanelAccount::SignedIn {
                username: username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            }
        } else {
            PanelAccount::SignedOut
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            PanelAccount::SignedIn { .. } => "Logout",
            PanelAccount::SignedOut => "Login",
        }
    }

    pub fn button_action(&self) -> NavAction {
        match self {
            PanelAccount::SignedIn { .. } => NavAction::PanelLogout,
            PanelAccount::SignedOut => NavAction::PanelLogin,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::types::{AuthStatus, User};

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[derive(Default)]
    struct CountingHandlers {
        logins: Cell<u32>,
        logouts: Cell<u32>,
        rules: Cell<u32>,
    }

    impl NavHandlers for CountingHandlers {
        fn login(&self) {
            self.logins.set(self.logins.get() + 1);
        }

        fn logout(&self) {
            self.logouts.set(self.logouts.get() + 1);
        }

        fn open_rules(&self) {
            self.rules.set(self.rules.get() + 1);
        }
    }

    struct NoHandlers;

    impl NavHandlers for NoHandlers {}

    fn click(
        state: &mut NavState,
        action: NavAction,
        navigator: &RecordingNavigator,
        handlers: &impl NavHandlers,
    ) {
        if let Some(effect) = state.dispatch(action) {
            run_effect(effect, navigator, handlers);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert!(!state.menu_open);
        assert!(!state.rules_visible);
    }

    #[test]
    fn test_toggle_menu_twice_restores_state() {
        let mut state = NavState::new();
        assert_eq!(state.dispatch(NavAction::ToggleMenu), None);
        assert!(state.menu_open);
        assert_eq!(state.dispatch(NavAction::ToggleMenu), None);
        assert_eq!(state, NavState::new());
    }

    #[test]
    fn test_top_bar_logged_in_shows_user_name() {
        let auth = AuthStatus::signed_in(Some(User::new("Alice")));
        let button = TopBarButton::for_auth(&auth);
        assert_eq!(button.label, "Alice");
        assert_eq!(button.action, None);
    }

    #[test]
    fn test_top_bar_logged_in_without_user() {
        let auth = AuthStatus::signed_in(None);
        let button = TopBarButton::for_auth(&auth);
        assert_eq!(button.label, "Noname");
        assert_eq!(button.action, None);
    }

    #[test]
    fn test_top_bar_signed_out_goes_to_login() {
        let button = TopBarButton::for_auth(&AuthStatus::signed_out());
        assert_eq!(button.label, "Sign In /Login");
        assert_eq!(button.action, Some(NavAction::GoToLogin));

        let navigator = RecordingNavigator::default();
        let mut state = NavState::new();
        click(&mut state, NavAction::GoToLogin, &navigator, &NoHandlers);
        assert_eq!(*navigator.visited.borrow(), vec![Route::Login]);
        assert_eq!(navigator.visited.borrow()[0].path(), "/login");
    }

    #[test]
    fn test_panel_account_from_props() {
        let signed_in = PanelAccount::from_props(true, None);
        assert_eq!(
            signed_in,
            PanelAccount::SignedIn {
                username: "unknown".to_string()
            }
        );
        assert_eq!(signed_in.button_label(), "Logout");
        assert_eq!(signed_in.button_action(), NavAction::PanelLogout);

        let named = PanelAccount::from_props(true, Some("Carol".to_string()));
        assert_eq!(
            named,
            PanelAccount::SignedIn {
                username: "Carol".to_string()
            }
        );

        let signed_out = PanelAccount::from_props(false, Some("Carol".to_string()));
        assert_eq!(signed_out, PanelAccount::SignedOut);
        assert_eq!(signed_out.button_label(), "Login");
        assert_eq!(signed_out.button_action(), NavAction::PanelLogin);
    }

    #[test]
    fn test_panel_buttons_invoke_handlers() {
        let navigator = RecordingNavigator::default();
        let handlers = CountingHandlers::default();
        let mut state = NavState::new();

        click(&mut state, NavAction::PanelLogin, &navigator, &handlers);
        click(&mut state, NavAction::PanelLogout, &navigator, &handlers);

        assert_eq!(handlers.logins.get(), 1);
        assert_eq!(handlers.logouts.get(), 1);
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_missing_handlers_are_noops() {
        let navigator = RecordingNavigator::default();
        let mut state = NavState { menu_open: true, rules_visible: false };

        click(&mut state, NavAction::PanelLogin, &navigator, &NoHandlers);
        click(&mut state, NavAction::PanelLogout, &navigator, &NoHandlers);
        click(&mut state, NavAction::Rules { external: true }, &navigator, &NoHandlers);

        assert!(!state.menu_open);
        assert!(!state.rules_visible);
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_about_us_navigates_to_error_page() {
        let navigator = RecordingNavigator::default();
        let mut state = NavState { menu_open: true, rules_visible: false };

        click(&mut state, NavAction::AboutUs, &navigator, &NoHandlers);

        assert_eq!(*navigator.visited.borrow(), vec![Route::Error]);
        assert_eq!(navigator.visited.borrow()[0].path(), "/error");
        // About Us leaves the menu alone
        assert!(state.menu_open);
    }

    #[test]
    fn test_external_rules_closes_menu_and_calls_once() {
        let navigator = RecordingNavigator::default();
        let handlers = CountingHandlers::default();
        let mut state = NavState::new();

        click(&mut state, NavAction::ToggleMenu, &navigator, &handlers);
        click(&mut state, NavAction::Rules { external: true }, &navigator, &handlers);

        assert!(!state.menu_open);
        assert!(!state.rules_visible);
        assert_eq!(handlers.rules.get(), 1);
    }

    #[test]
    fn test_internal_rules_overlay_opens_as_menu_closes() {
        let mut state = NavState::new();
        state.dispatch(NavAction::ToggleMenu);

        assert_eq!(state.dispatch(NavAction::Rules { external: false }), None);
        assert_eq!(
            state,
            NavState {
                menu_open: false,
                rules_visible: true
            }
        );

        state.dispatch(NavAction::CloseRules);
        assert_eq!(state, NavState::new());
    }

    #[test]
    fn test_rules_never_visible_with_menu_open() {
        let actions = [
            NavAction::ToggleMenu,
            NavAction::Rules { external: false },
            NavAction::ToggleMenu,
            NavAction::AboutUs,
            NavAction::CloseRules,
            NavAction::ToggleMenu,
            NavAction::Rules { external: true },
        ];

        let mut state = NavState::new();
        for action in actions {
            let was_visible = state.rules_visible;
            state.dispatch(action);
            if state.rules_visible && !was_visible {
                assert!(!state.menu_open, "rules opened while menu stayed open");
            }
        }
    }
}
