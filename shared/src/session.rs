use crate::models::{User, UserType};
use crate::routes::Route;

/// Whether the stored credentials have been looked at yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    Ready,
}

/// Global authentication state.
///
/// Never mutated in place; every transition produces a new value through
/// [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub phase: SessionPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Credentials read back from local storage at startup; `user` is `None`
    /// when only a token was stored and it still has to be validated
    Restored {
        token: Option<String>,
        user: Option<User>,
    },
    /// The backend accepted the stored token
    Validated(User),
    LoggedIn { token: String, user: User },
    /// The user changed profile fields
    UserUpdated(User),
    LoggedOut,
}

impl Session {
    pub fn apply(&self, action: SessionAction) -> Session {
        match action {
            SessionAction::Restored { token, user } => {
                let pending = token.is_some() && user.is_none();
                Session {
                    user: if token.is_some() { user } else { None },
                    token,
                    phase: if pending {
                        SessionPhase::Loading
                    } else {
                        SessionPhase::Ready
                    },
                }
            }
            SessionAction::Validated(user) => Session {
                token: self.token.clone(),
                user: self.token.as_ref().map(|_| user),
                phase: SessionPhase::Ready,
            },
            SessionAction::LoggedIn { token, user } => Session {
                token: Some(token),
                user: Some(user),
                phase: SessionPhase::Ready,
            },
            SessionAction::UserUpdated(user) => Session {
                token: self.token.clone(),
                user: self.user.as_ref().map(|_| user),
                phase: self.phase,
            },
            SessionAction::LoggedOut => Session {
                token: None,
                user: None,
                phase: SessionPhase::Ready,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| {
            u.user_type == UserType::Admin || u.role.as_deref() == Some("admin")
        })
    }

    pub fn is_daycare(&self) -> bool {
        self.user_type() == Some(UserType::Daycare)
    }

    pub fn is_parent(&self) -> bool {
        self.user_type() == Some(UserType::Parent)
    }

    /// Landing dashboard for the signed-in role
    pub fn default_dashboard(&self) -> Route {
        if self.is_admin() {
            Route::AdminDashboard
        } else if self.is_parent() {
            Route::ParentDashboard
        } else {
            Route::DaycareDashboard
        }
    }
}

/// `Authorization` header value for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_type: UserType) -> User {
        User {
            id: Some(7),
            email: "someone@careconnect.ca".to_string(),
            user_type,
            ..User::default()
        }
    }

    #[test]
    fn test_initial_session_is_loading() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_with_user_is_ready() {
        let session = Session::default().apply(SessionAction::Restored {
            token: Some("t".to_string()),
            user: Some(user(UserType::Parent)),
        });
        assert!(!session.is_loading());
        assert!(session.is_authenticated());
        assert!(session.is_parent());
        assert_eq!(session.token.as_deref().map(bearer).as_deref(), Some("Bearer t"));
    }

    #[test]
    fn test_restore_token_only_waits_for_validation() {
        let session = Session::default().apply(SessionAction::Restored {
            token: Some("t".to_string()),
            user: None,
        });
        assert!(session.is_loading());
        assert!(!session.is_authenticated());

        let session = session.apply(SessionAction::Validated(user(UserType::Daycare)));
        assert!(!session.is_loading());
        assert!(session.is_daycare());
    }

    #[test]
    fn test_restore_without_token_drops_user() {
        let session = Session::default().apply(SessionAction::Restored {
            token: None,
            user: Some(user(UserType::Admin)),
        });
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert_eq!(session.phase, SessionPhase::Ready);
    }

    #[test]
    fn test_login_and_logout() {
        let session = Session::default().apply(SessionAction::LoggedIn {
            token: "abc".to_string(),
            user: user(UserType::Admin),
        });
        assert!(session.is_admin());
        assert_eq!(session.default_dashboard(), Route::AdminDashboard);

        let session = session.apply(SessionAction::LoggedOut);
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_admin_by_role() {
        let mut staff = user(UserType::Daycare);
        staff.role = Some("admin".to_string());
        let session = Session::default().apply(SessionAction::LoggedIn {
            token: "abc".to_string(),
            user: staff,
        });
        assert!(session.is_admin());
        assert!(session.is_daycare());
    }

    #[test]
    fn test_user_update_keeps_token() {
        let session = Session::default().apply(SessionAction::LoggedIn {
            token: "abc".to_string(),
            user: user(UserType::Parent),
        });
        let mut renamed = user(UserType::Parent);
        renamed.first_name = "Marie".to_string();
        let session = session.apply(SessionAction::UserUpdated(renamed));
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(session.user.map(|u| u.first_name), Some("Marie".to_string()));
    }

    #[test]
    fn test_default_dashboards() {
        let daycare = Session::default().apply(SessionAction::LoggedIn {
            token: "a".to_string(),
            user: user(UserType::Daycare),
        });
        assert_eq!(daycare.default_dashboard(), Route::DaycareDashboard);
        let parent = Session::default().apply(SessionAction::LoggedIn {
            token: "a".to_string(),
            user: user(UserType::Parent),
        });
        assert_eq!(parent.default_dashboard(), Route::ParentDashboard);
    }
}
