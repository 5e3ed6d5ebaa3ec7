//! Hash route table and access guards.

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    RegisterDaycare,
    RegisterParent { token: Option<String> },
    Dashboard,
    AdminDashboard,
    DaycareDashboard,
    ParentDashboard,
    Children,
    ChildProfile { id: i64 },
    Incidents,
    Payments,
    Account,
    AgeGroups,
}

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not
    Open,
    /// Only signed-out visitors; signed-in users go to their dashboard
    PublicOnly,
    /// Any signed-in user
    Authenticated,
    AdminOnly,
    ParentOnly,
    /// Daycare staff and system admins
    Daycare,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Stored credentials are still being checked
    Pending,
    /// Go elsewhere; `remember` is the route to resume after logging in
    Redirect { to: Route, remember: Option<Route> },
}

impl Route {
    /// Parses a location hash (`#/dashboard/children/4`) or bare path.
    /// Unknown paths resolve to the landing page.
    pub fn parse(hash: &str) -> Route {
        let raw = hash.trim_start_matches('#');
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["register", "daycare"] => Route::RegisterDaycare,
            ["register", "parent"] => Route::RegisterParent {
                token: query.and_then(|q| query_param(q, "token")),
            },
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "admin"] => Route::AdminDashboard,
            ["dashboard", "daycare"] => Route::DaycareDashboard,
            ["dashboard", "parent"] => Route::ParentDashboard,
            ["dashboard", "children"] => Route::Children,
            ["dashboard", "children", id] => match id.parse() {
                Ok(id) => Route::ChildProfile { id },
                Err(_) => Route::Landing,
            },
            ["dashboard", "incidents"] => Route::Incidents,
            ["dashboard", "payments"] => Route::Payments,
            ["dashboard", "account"] => Route::Account,
            ["dashboard", "age-groups"] => Route::AgeGroups,
            _ => Route::Landing,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::RegisterDaycare => "/register/daycare".to_string(),
            Route::RegisterParent { token: Some(token) } => {
                format!("/register/parent?token={}", urlencoding::encode(token))
            }
            Route::RegisterParent { token: None } => "/register/parent".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::AdminDashboard => "/dashboard/admin".to_string(),
            Route::DaycareDashboard => "/dashboard/daycare".to_string(),
            Route::ParentDashboard => "/dashboard/parent".to_string(),
            Route::Children => "/dashboard/children".to_string(),
            Route::ChildProfile { id } => format!("/dashboard/children/{}", id),
            Route::Incidents => "/dashboard/incidents".to_string(),
            Route::Payments => "/dashboard/payments".to_string(),
            Route::Account => "/dashboard/account".to_string(),
            Route::AgeGroups => "/dashboard/age-groups".to_string(),
        }
    }

    /// Value for `window.location.hash`
    pub fn to_hash(&self) -> String {
        format!("#{}", self.to_path())
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Landing | Route::RegisterParent { .. } => Access::Open,
            Route::Login | Route::Register | Route::RegisterDaycare => Access::PublicOnly,
            Route::Dashboard | Route::Incidents | Route::Payments | Route::Account => {
                Access::Authenticated
            }
            Route::AdminDashboard => Access::AdminOnly,
            Route::ParentDashboard => Access::ParentOnly,
            Route::DaycareDashboard
            | Route::Children
            | Route::ChildProfile { .. }
            | Route::AgeGroups => Access::Daycare,
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Decides what happens when `route` is opened with the given session
pub fn guard(route: &Route, session: &Session) -> Guard {
    let access = route.access();
    if access == Access::Open {
        return Guard::Allow;
    }
    if session.is_loading() {
        return Guard::Pending;
    }

    let signed_in = session.is_authenticated();
    let home = || Guard::Redirect {
        to: session.default_dashboard(),
        remember: None,
    };

    match access {
        Access::Open => Guard::Allow,
        Access::PublicOnly if signed_in => Guard::Redirect {
            to: Route::Dashboard,
            remember: None,
        },
        Access::PublicOnly => Guard::Allow,
        _ if !signed_in => Guard::Redirect {
            to: Route::Login,
            remember: Some(route.clone()),
        },
        Access::Authenticated if *route == Route::Dashboard => home(),
        Access::Authenticated => Guard::Allow,
        Access::AdminOnly if session.is_admin() => Guard::Allow,
        Access::ParentOnly if session.is_parent() => Guard::Allow,
        Access::Daycare if session.is_daycare() || session.is_admin() => Guard::Allow,
        Access::AdminOnly | Access::ParentOnly | Access::Daycare => home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserType};
    use crate::session::SessionAction;

    fn signed_in(user_type: UserType) -> Session {
        Session::default().apply(SessionAction::LoggedIn {
            token: "tok".to_string(),
            user: User {
                user_type,
                ..User::default()
            },
        })
    }

    fn signed_out() -> Session {
        Session::default().apply(SessionAction::LoggedOut)
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("#/"), Route::Landing);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/dashboard/children/42"), Route::ChildProfile { id: 42 });
        assert_eq!(Route::parse("#/dashboard/age-groups"), Route::AgeGroups);
        assert_eq!(
            Route::parse("#/register/parent?token=abc123"),
            Route::RegisterParent { token: Some("abc123".to_string()) }
        );
        assert_eq!(Route::parse("#/register/parent?token="), Route::RegisterParent { token: None });
    }

    #[test]
    fn test_unknown_routes_fall_back_to_landing() {
        assert_eq!(Route::parse("#/nowhere"), Route::Landing);
        assert_eq!(Route::parse("#/dashboard/children/abc"), Route::Landing);
    }

    #[test]
    fn test_paths_parse_back() {
        let routes = [
            Route::Register,
            Route::RegisterDaycare,
            Route::RegisterParent { token: Some("t1".to_string()) },
            Route::DaycareDashboard,
            Route::ChildProfile { id: 9 },
            Route::Payments,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_invitation_token_is_escaped_in_links() {
        let route = Route::RegisterParent { token: Some("a b&c=d/e".to_string()) };
        let hash = route.to_hash();
        assert_eq!(hash, "#/register/parent?token=a%20b%26c%3Dd%2Fe");
        assert_eq!(Route::parse(&hash), route);
        assert_eq!(
            Route::parse("#/register/parent?token=inv%2B42"),
            Route::RegisterParent { token: Some("inv+42".to_string()) }
        );
    }

    #[test]
    fn test_pending_while_loading() {
        let session = Session::default();
        assert_eq!(guard(&Route::Children, &session), Guard::Pending);
        assert_eq!(guard(&Route::Login, &session), Guard::Pending);
        assert_eq!(guard(&Route::Landing, &session), Guard::Allow);
    }

    #[test]
    fn test_protected_route_redirects_to_login() {
        assert_eq!(
            guard(&Route::Payments, &signed_out()),
            Guard::Redirect {
                to: Route::Login,
                remember: Some(Route::Payments)
            }
        );
    }

    #[test]
    fn test_public_only_routes_redirect_when_signed_in() {
        let session = signed_in(UserType::Parent);
        assert_eq!(
            guard(&Route::Login, &session),
            Guard::Redirect { to: Route::Dashboard, remember: None }
        );
        assert_eq!(guard(&Route::Login, &signed_out()), Guard::Allow);
        assert_eq!(
            guard(&Route::RegisterParent { token: None }, &session),
            Guard::Allow
        );
    }

    #[test]
    fn test_dashboard_resolves_by_role() {
        assert_eq!(
            guard(&Route::Dashboard, &signed_in(UserType::Admin)),
            Guard::Redirect { to: Route::AdminDashboard, remember: None }
        );
        assert_eq!(
            guard(&Route::Dashboard, &signed_in(UserType::Daycare)),
            Guard::Redirect { to: Route::DaycareDashboard, remember: None }
        );
    }

    #[test]
    fn test_role_restrictions() {
        let parent = signed_in(UserType::Parent);
        let daycare = signed_in(UserType::Daycare);
        let admin = signed_in(UserType::Admin);

        assert_eq!(
            guard(&Route::AdminDashboard, &parent),
            Guard::Redirect { to: Route::ParentDashboard, remember: None }
        );
        assert_eq!(
            guard(&Route::Children, &parent),
            Guard::Redirect { to: Route::ParentDashboard, remember: None }
        );
        assert_eq!(
            guard(&Route::ParentDashboard, &daycare),
            Guard::Redirect { to: Route::DaycareDashboard, remember: None }
        );
        assert_eq!(guard(&Route::Children, &daycare), Guard::Allow);
        assert_eq!(guard(&Route::AgeGroups, &admin), Guard::Allow);
        assert_eq!(guard(&Route::Incidents, &parent), Guard::Allow);
    }
}
