use std::rc::Rc;

use shared::{
    ApiError, AuthResponse, LoginRequest, PasswordChange, ProfileUpdate, RegistrationRequest,
    Session, SessionAction, User,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage;

/// Completion callback handed to an async action
pub type Done<T> = Callback<Result<T, ApiError>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState(pub Session);

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(SessionState(self.0.apply(action)))
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthActions {
    pub login: Callback<(LoginRequest, Done<User>)>,
    /// Daycare, parent or invitation registration, chosen by the request
    pub register: Callback<(RegistrationRequest, Done<User>)>,
    pub logout: Callback<()>,
    pub update_profile: Callback<(ProfileUpdate, Done<User>)>,
    pub change_password: Callback<(PasswordChange, Done<()>)>,
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub session: Session,
    pub actions: AuthActions,
}

impl AuthContext {
    /// API client carrying the session token
    pub fn api(&self) -> ApiClient {
        ApiClient::new().with_token(self.session.token.clone())
    }
}

fn signed_in(response: AuthResponse) -> Result<(String, User), ApiError> {
    match (response.access_token, response.user) {
        (Some(token), Some(user)) => Ok((token, user)),
        _ => Err(ApiError::Decode("authentication response without token or user".to_string())),
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    // Restore the stored session once; a bare token is checked with the backend first
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let (token, user) = storage::load_credentials();
            let needs_validation = token.is_some() && user.is_none();
            state.dispatch(SessionAction::Restored {
                token: token.clone(),
                user,
            });

            if let (true, Some(token)) = (needs_validation, token) {
                spawn_local(async move {
                    let api = ApiClient::new().with_token(Some(token));
                    match api.validate().await {
                        Ok(user) => {
                            storage::save_user(&user);
                            state.dispatch(SessionAction::Validated(user));
                        }
                        Err(ApiError::Network(e)) => {
                            Logger::warn_with_component("auth", &format!("could not validate session: {}", e));
                            state.dispatch(SessionAction::LoggedOut);
                        }
                        Err(e) => {
                            Logger::info_with_component("auth", &format!("stored token rejected: {}", e));
                            storage::clear_credentials();
                            state.dispatch(SessionAction::LoggedOut);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        use_callback((), move |(request, done): (LoginRequest, Done<User>), _| {
            let state = state.clone();
            spawn_local(async move {
                let result = ApiClient::new().login(&request).await.and_then(signed_in);
                match result {
                    Ok((token, user)) => {
                        Logger::info_with_component("auth", &format!("signed in as {}", user.email));
                        storage::save_credentials(&token, &user);
                        state.dispatch(SessionAction::LoggedIn { token, user: user.clone() });
                        done.emit(Ok(user));
                    }
                    Err(e) => done.emit(Err(e)),
                }
            });
        })
    };

    let register = {
        let state = state.clone();
        use_callback((), move |(request, done): (RegistrationRequest, Done<User>), _| {
            let state = state.clone();
            spawn_local(async move {
                let result = ApiClient::new().register(&request).await.and_then(signed_in);
                match result {
                    Ok((token, user)) => {
                        Logger::info_with_component("auth", &format!("registered {}", user.email));
                        storage::save_credentials(&token, &user);
                        state.dispatch(SessionAction::LoggedIn { token, user: user.clone() });
                        done.emit(Ok(user));
                    }
                    Err(e) => done.emit(Err(e)),
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        use_callback((), move |_: (), _| {
            storage::clear_credentials();
            state.dispatch(SessionAction::LoggedOut);
        })
    };

    let update_profile = {
        let state = state.clone();
        use_callback(state.0.token.clone(), move |(update, done): (ProfileUpdate, Done<User>), token| {
            let state = state.clone();
            let api = ApiClient::new().with_token(token.clone());
            spawn_local(async move {
                match api.update_profile(&update).await {
                    Ok(user) => {
                        storage::save_user(&user);
                        state.dispatch(SessionAction::UserUpdated(user.clone()));
                        done.emit(Ok(user));
                    }
                    Err(e) => done.emit(Err(e)),
                }
            });
        })
    };

    let change_password = use_callback(
        state.0.token.clone(),
        move |(change, done): (PasswordChange, Done<()>), token| {
            let api = ApiClient::new().with_token(token.clone());
            spawn_local(async move {
                done.emit(api.change_password(&change).await);
            });
        },
    );

    let context = AuthContext {
        session: state.0.clone(),
        actions: AuthActions {
            login,
            register,
            logout,
            update_profile,
            change_password,
        },
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext {
        session: Session::default(),
        actions: AuthActions {
            login: Callback::noop(),
            register: Callback::noop(),
            logout: Callback::noop(),
            update_profile: Callback::noop(),
            change_password: Callback::noop(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserType;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_signed_in_needs_token_and_user() {
        let ok = signed_in(AuthResponse {
            success: true,
            access_token: Some("t".to_string()),
            user: Some(User { user_type: UserType::Parent, ..User::default() }),
        });
        assert!(ok.is_ok());

        let missing = signed_in(AuthResponse {
            success: true,
            access_token: None,
            user: Some(User::default()),
        });
        assert!(matches!(missing, Err(ApiError::Decode(_))));
    }

    #[wasm_bindgen_test]
    fn test_reducer_delegates_to_session() {
        let state = Rc::new(SessionState::default()).reduce(SessionAction::LoggedOut);
        assert!(!state.0.is_loading());
    }
}
