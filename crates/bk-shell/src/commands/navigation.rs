//! Route navigation and guard resolution.
//!
//! After every command the console calls [`settle`], which plays the role of
//! re-rendering the page: the guard is evaluated against the current session,
//! redirects are followed, and the dashboard pollers are mounted or dropped to
//! match the route that actually renders.

use tracing::{debug, info_span, warn, Instrument};

use bk_core::{GuardDecision, Route};

use crate::bootstrap::AppRuntime;

const MAX_REDIRECTS: usize = Route::ALL.len();

/// What the console is showing after navigation settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The session is still resolving; the route is kept and shown as loading.
    Loading(Route),
    Rendered(Route),
    /// Nothing navigated yet.
    Blank,
}

impl Screen {
    pub fn route(self) -> Option<Route> {
        match self {
            Screen::Loading(route) | Screen::Rendered(route) => Some(route),
            Screen::Blank => None,
        }
    }
}

/// Navigate to `route`, then settle the guard.
pub async fn open(runtime: &AppRuntime, route: Route) -> Screen {
    let span = info_span!("command.navigation.open", route = %route);
    async {
        runtime.deps.navigator.navigate(route);
        settle(runtime).await
    }
    .instrument(span)
    .await
}

/// Evaluate the guard for the current route and follow redirects.
pub async fn settle(runtime: &AppRuntime) -> Screen {
    let Some(requested) = runtime.current_route() else {
        runtime.unmount_dashboard().await;
        return Screen::Blank;
    };

    let snapshot = runtime.session_snapshot();
    let mut route = requested;
    let mut screen = Screen::Blank;
    for _ in 0..=MAX_REDIRECTS {
        match runtime.guard().evaluate_route(route, &snapshot) {
            GuardDecision::Render => {
                screen = Screen::Rendered(route);
                break;
            }
            GuardDecision::Pending => {
                screen = Screen::Loading(route);
                break;
            }
            GuardDecision::Redirect(target) => {
                debug!(from = %route, to = %target, "guard redirect");
                route = target;
            }
        }
    }

    if screen == Screen::Blank {
        warn!(route = %requested, "guard redirect loop, staying on login");
        route = Route::Login;
        screen = Screen::Rendered(Route::Login);
    }

    if route != requested {
        runtime.deps.navigator.navigate(route);
    }

    match screen {
        Screen::Rendered(Route::Dashboard) => {
            runtime.mount_dashboard().await;
        }
        Screen::Rendered(Route::Onboarding) => {
            runtime.unmount_dashboard().await;
            let onboarding = runtime.usecases().onboarding();
            if onboarding.state().await.is_finished() {
                onboarding.reset().await;
            }
        }
        _ => {
            runtime.unmount_dashboard().await;
        }
    }

    screen
}
