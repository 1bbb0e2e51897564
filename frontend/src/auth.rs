use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::{AuthProvider, User};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

/// Reactive session context. Reads through [`AuthProvider`] subscribe the
/// calling view to changes.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        let stored_token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let stored_user: Option<User> = LocalStorage::get(USER_KEY).ok();

        Self {
            token: create_rw_signal(stored_token),
            user: create_rw_signal(stored_user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Starts a local session for `user` under a fresh token.
    pub fn sign_in(&self, user: User) {
        let token = uuid::Uuid::new_v4().to_string();
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
            log::warn!("could not persist session token: {}", e);
        }
        if let Err(e) = LocalStorage::set(USER_KEY, &user) {
            log::warn!("could not persist user: {}", e);
        }
        log::info!("signed in as {}", user.name);
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        log::info!("signed out");
        self.token.set(None);
        self.user.set(None);
    }

    pub fn user_name(&self) -> Option<String> {
        self.user.with(|user| user.as_ref().map(|u| u.name.clone()))
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for AuthState {
    fn is_logged_in(&self) -> bool {
        self.is_authenticated()
    }

    fn get_user(&self) -> Option<User> {
        self.user.get()
    }
}

pub fn use_auth() -> AuthState {
    expect_context::<AuthState>()
}
