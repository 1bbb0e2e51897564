use std::rc::Rc;

use leptos_router::{use_navigate, NavigateOptions};
use shared::{Navigator, Route};

/// [`Navigator`] backed by the leptos router.
#[derive(Clone)]
pub struct RouterNavigator {
    go: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called inside a `<Router>`.
    pub fn from_router() -> Self {
        Self::new(use_navigate())
    }

    pub fn new(go: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self { go: Rc::new(go) }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: Route) {
        log::debug!("navigating to {}", route);
        (self.go)(route.path(), NavigateOptions::default());
    }
}
