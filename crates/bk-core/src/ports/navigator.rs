use crate::routing::Route;

/// Current-route holder, the console's stand-in for browser history.
pub trait NavigatorPort: Send + Sync {
    fn navigate(&self, route: Route);

    fn current(&self) -> Option<Route>;
}
