use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Paths the navigation bar can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    /// Target of "About Us". The about page does not exist yet, so it lands
    /// on the generic error page.
    Error,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Error => "/error",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_end_matches('/');
        match trimmed {
            "" => Ok(Route::Home),
            "/login" => Ok(Route::Login),
            "/error" => Ok(Route::Error),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

/// Performs client-side route changes on behalf of a component.
pub trait Navigator {
    fn navigate(&self, route: Route);
}
