//! Role-guarded navigation targets.
//!
//! Every view except the login screen requires a session, and each protected
//! view belongs to exactly one role. Resolution never fails: it either allows
//! the requested route or names the route to redirect to.

use super::{User, UserRole};
use std::fmt;

const ADMIN_SUBMISSIONS_PREFIX: &str = "/admin/submissions/";

/// Navigable views of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login screen.
    Login,
    /// Field worker landing page with their history.
    FieldHome,
    /// Evidence capture form.
    NewConnection,
    /// Field worker submission history.
    MySubmissions,
    /// Administrator summary tiles and recent activity.
    AdminDashboard,
    /// Filterable list of all submissions.
    SubmissionList,
    /// Review screen for one submission.
    SubmissionDetail(String),
    /// Map of captured points and the pipeline path.
    Map,
}

impl Route {
    /// Parses a path into a route; unknown paths yield `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/" => Some(Self::FieldHome),
            "/new" => Some(Self::NewConnection),
            "/submissions" => Some(Self::MySubmissions),
            "/admin/dashboard" => Some(Self::AdminDashboard),
            "/admin/submissions" => Some(Self::SubmissionList),
            "/admin/map" => Some(Self::Map),
            other => other
                .strip_prefix(ADMIN_SUBMISSIONS_PREFIX)
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::SubmissionDetail(id.to_owned())),
        }
    }

    /// Returns the path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::FieldHome => "/".to_owned(),
            Self::NewConnection => "/new".to_owned(),
            Self::MySubmissions => "/submissions".to_owned(),
            Self::AdminDashboard => "/admin/dashboard".to_owned(),
            Self::SubmissionList => "/admin/submissions".to_owned(),
            Self::SubmissionDetail(id) => format!("{ADMIN_SUBMISSIONS_PREFIX}{id}"),
            Self::Map => "/admin/map".to_owned(),
        }
    }

    /// Returns the role a route is reserved for; `None` for the login screen.
    #[must_use]
    pub const fn required_role(&self) -> Option<UserRole> {
        match self {
            Self::Login => None,
            Self::FieldHome | Self::NewConnection | Self::MySubmissions => {
                Some(UserRole::FieldWorker)
            }
            Self::AdminDashboard | Self::SubmissionList | Self::SubmissionDetail(_) | Self::Map => {
                Some(UserRole::Admin)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of resolving a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Allow(Route),
    /// Navigate to another route instead.
    Redirect(Route),
}

impl RouteDecision {
    /// Returns the route that ends up displayed.
    #[must_use]
    pub const fn target(&self) -> &Route {
        match self {
            Self::Allow(route) | Self::Redirect(route) => route,
        }
    }
}

/// Landing route for a role.
#[must_use]
pub const fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminDashboard,
        UserRole::FieldWorker => Route::FieldHome,
    }
}

/// Resolves a requested path against the current session.
///
/// Unknown paths redirect to the session role's home, or to
/// [`Route::Login`] without a session.
#[must_use]
pub fn resolve_route(session: Option<&User>, path: &str) -> RouteDecision {
    let Some(route) = Route::from_path(path) else {
        return RouteDecision::Redirect(
            session.map_or(Route::Login, |user| home_route(user.role())),
        );
    };
    guard(session, route)
}

fn guard(session: Option<&User>, route: Route) -> RouteDecision {
    match (session, route.required_role()) {
        (None, None) => RouteDecision::Allow(route),
        (None, Some(_)) => RouteDecision::Redirect(Route::Login),
        (Some(user), None) => RouteDecision::Redirect(home_route(user.role())),
        (Some(user), Some(role)) if role == user.role() => RouteDecision::Allow(route),
        (Some(user), Some(_)) => RouteDecision::Redirect(home_route(user.role())),
    }
}
