use tokio::sync::watch;
use tracing::debug;

use bk_core::ports::NavigatorPort;
use bk_core::routing::Route;

/// Holds the current route and publishes changes to subscribers.
pub struct InMemoryNavigator {
    current: watch::Sender<Option<Route>>,
}

impl InMemoryNavigator {
    pub fn new(initial: Option<Route>) -> Self {
        let (current, _) = watch::channel(initial);
        Self { current }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Route>> {
        self.current.subscribe()
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl NavigatorPort for InMemoryNavigator {
    fn navigate(&self, route: Route) {
        debug!(to = route.path(), "navigate");
        self.current.send_replace(Some(route));
    }

    fn current(&self) -> Option<Route> {
        *self.current.borrow()
    }
}
