//! Declarative role-based route policy.
//!
//! # Responsibility
//! - Centralize role gating in one table consulted by one function,
//!   replacing per-page conditional checks.
//!
//! # Invariants
//! - Unauthenticated access to a gated route redirects to `/login`.
//! - Authenticated access outside the role's allowed set redirects to
//!   `/feed`.
//! - Routes absent from the table are public.

use crate::model::user::UserRole;

/// Alumni landing route after login.
pub const FEED_ROUTE: &str = "/feed";
/// Admin landing route after login.
pub const ADMIN_ROUTE: &str = "/admin";
/// Login route used as the unauthenticated redirect target.
pub const LOGIN_ROUTE: &str = "/login";

/// One row of the gating table.
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub route: &'static str,
    pub allowed_roles: &'static [UserRole],
}

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const ANY_ROLE: &[UserRole] = &[UserRole::Admin, UserRole::Alumni];

/// Gated routes and the roles allowed to view them.
pub const ROUTE_POLICIES: &[RoutePolicy] = &[
    RoutePolicy {
        route: ADMIN_ROUTE,
        allowed_roles: ADMIN_ONLY,
    },
    RoutePolicy {
        route: "/admin/alumni",
        allowed_roles: ADMIN_ONLY,
    },
    RoutePolicy {
        route: FEED_ROUTE,
        allowed_roles: ANY_ROLE,
    },
    RoutePolicy {
        route: "/jobs",
        allowed_roles: ANY_ROLE,
    },
    RoutePolicy {
        route: "/profile",
        allowed_roles: ANY_ROLE,
    },
];

/// Outcome of consulting the policy table for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Allow,
    /// Send the visitor somewhere else.
    Redirect(&'static str),
}

/// Role-based landing route computed after a successful login.
pub fn landing_route(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => ADMIN_ROUTE,
        UserRole::Alumni => FEED_ROUTE,
    }
}

/// Single gating function consulted for every navigation.
///
/// `role` is the current user's role, or `None` when anonymous.
pub fn authorize(route: &str, role: Option<UserRole>) -> RouteDecision {
    // Authenticated visitors skip the auth pages entirely. The register
    // page lands on the feed for every role; login and the root follow the
    // role's landing route.
    if let Some(role) = role {
        if route == "/register" {
            return RouteDecision::Redirect(FEED_ROUTE);
        }
        if route == LOGIN_ROUTE || route == "/" {
            return RouteDecision::Redirect(landing_route(role));
        }
    }

    let Some(policy) = ROUTE_POLICIES.iter().find(|policy| policy.route == route) else {
        return RouteDecision::Allow;
    };

    match role {
        None => RouteDecision::Redirect(LOGIN_ROUTE),
        Some(role) if policy.allowed_roles.contains(&role) => RouteDecision::Allow,
        Some(_) => RouteDecision::Redirect(FEED_ROUTE),
    }
}

#[cfg(test)]
mod tests {
    use super::{authorize, landing_route, RouteDecision};
    use crate::model::user::UserRole;

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(
            authorize("/feed", None),
            RouteDecision::Redirect("/login")
        );
        assert_eq!(
            authorize("/admin", None),
            RouteDecision::Redirect("/login")
        );
    }

    #[test]
    fn alumni_cannot_reach_admin_routes() {
        assert_eq!(
            authorize("/admin/alumni", Some(UserRole::Alumni)),
            RouteDecision::Redirect("/feed")
        );
    }

    #[test]
    fn admin_may_browse_alumni_routes() {
        assert_eq!(authorize("/jobs", Some(UserRole::Admin)), RouteDecision::Allow);
    }

    #[test]
    fn authenticated_visitors_skip_auth_pages() {
        assert_eq!(
            authorize("/login", Some(UserRole::Admin)),
            RouteDecision::Redirect("/admin")
        );
        assert_eq!(
            authorize("/", Some(UserRole::Alumni)),
            RouteDecision::Redirect("/feed")
        );
    }

    #[test]
    fn register_page_always_lands_on_the_feed() {
        assert_eq!(
            authorize("/register", Some(UserRole::Admin)),
            RouteDecision::Redirect("/feed")
        );
        assert_eq!(
            authorize("/register", Some(UserRole::Alumni)),
            RouteDecision::Redirect("/feed")
        );
    }

    #[test]
    fn unknown_routes_are_public() {
        assert_eq!(authorize("/about", None), RouteDecision::Allow);
    }

    #[test]
    fn landing_route_follows_role() {
        assert_eq!(landing_route(UserRole::Admin), "/admin");
        assert_eq!(landing_route(UserRole::Alumni), "/feed");
    }
}
