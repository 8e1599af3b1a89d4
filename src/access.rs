//! Role-based access control: the route guard that decides render-vs-redirect
//! for a protected view, and the capability table consulted by both the guard
//! and the resource clients so the two can never drift apart.

use crate::models::user::Role;
use crate::session::SessionStore;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const STAFF: &[Role] = &[Role::Admin, Role::Recruiter];
pub const CANDIDATE_ONLY: &[Role] = &[Role::Candidate];
pub const ANY_AUTHENTICATED: &[Role] = &[Role::Admin, Role::Recruiter, Role::Candidate];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Jobs,
    Applications,
    Interviews,
    Chat,
    Files,
    Users,
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Publish,
    Close,
    ChangeStatus,
    Schedule,
    Respond,
    Complete,
    Upload,
    Manage,
}

/// The single declarative table: which roles may perform an action on a
/// resource. Route guards and in-page action visibility both read this.
pub fn allowed_roles(resource: Resource, action: Action) -> &'static [Role] {
    use Action::*;
    use Resource::*;

    match (resource, action) {
        (Jobs, View) => ANY_AUTHENTICATED,
        (Jobs, Create | Edit | Publish | Close | Delete) => STAFF,

        (Applications, View) => ANY_AUTHENTICATED,
        (Applications, Create) => CANDIDATE_ONLY,
        (Applications, ChangeStatus) => STAFF,

        (Interviews, View) => ANY_AUTHENTICATED,
        (Interviews, Schedule | Edit | Complete) => STAFF,
        (Interviews, Respond) => CANDIDATE_ONLY,

        (Chat, View | Create) => ANY_AUTHENTICATED,
        (Files, Upload) => ANY_AUTHENTICATED,

        (Users, _) => ADMIN_ONLY,
        (Analytics, View) => STAFF,

        // anything not spelled out stays admin-only
        _ => ADMIN_ONLY,
    }
}

pub fn can(role: Role, resource: Resource, action: Action) -> bool {
    allowed_roles(resource, action).contains(&role)
}

/// Outcome of guarding a protected route. Exactly one of the three: the guard
/// never both renders and redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    RedirectToLanding,
}

/// A route's access declaration. `allowed_roles: None` means any
/// authenticated role may enter.
#[derive(Debug, Clone, Copy)]
pub struct RouteAccess {
    pub allowed_roles: Option<&'static [Role]>,
}

impl RouteAccess {
    pub fn authenticated() -> Self {
        Self {
            allowed_roles: None,
        }
    }

    pub fn roles(roles: &'static [Role]) -> Self {
        Self {
            allowed_roles: Some(roles),
        }
    }

    /// Pure function of session + route config, no side effects beyond the
    /// caller acting on the returned decision. A role change mid-session is
    /// only observed once the session itself is refreshed.
    pub fn evaluate(&self, session: &SessionStore) -> RouteDecision {
        let Some(current) = session.current() else {
            return RouteDecision::RedirectToLogin;
        };

        match self.allowed_roles {
            Some(roles) if !roles.is_empty() && !roles.contains(&current.role) => {
                RouteDecision::RedirectToLanding
            }
            _ => RouteDecision::Render,
        }
    }
}
