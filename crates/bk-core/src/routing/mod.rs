//! Route table and navigation guard.

pub mod guard;

pub use guard::{GuardDecision, RouteGuard};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    Onboarding,
    Dashboard,
}

/// What a route demands from the session before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_onboarding: bool,
}

impl RouteRequirements {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_onboarding: false,
    };

    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_onboarding: false,
    };

    pub const ONBOARDED: Self = Self {
        requires_auth: true,
        requires_onboarding: true,
    };
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Login,
        Route::Register,
        Route::Onboarding,
        Route::Dashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Onboarding => "/onboarding",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn requirements(self) -> RouteRequirements {
        match self {
            Route::Login | Route::Register => RouteRequirements::PUBLIC,
            Route::Onboarding => RouteRequirements::AUTHENTICATED,
            Route::Dashboard => RouteRequirements::ONBOARDED,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == name)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_names_with_or_without_slash() {
        assert_eq!("dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("/onboarding".parse::<Route>().unwrap(), Route::Onboarding);
        assert!("/settings".parse::<Route>().is_err());
    }

    #[test]
    fn dashboard_requires_onboarding_but_onboarding_does_not() {
        assert_eq!(Route::Dashboard.requirements(), RouteRequirements::ONBOARDED);
        assert_eq!(
            Route::Onboarding.requirements(),
            RouteRequirements::AUTHENTICATED
        );
        assert_eq!(Route::Login.requirements(), RouteRequirements::PUBLIC);
    }
}
