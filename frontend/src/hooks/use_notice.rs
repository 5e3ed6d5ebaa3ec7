use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::ApiError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_auth::use_auth;
use super::use_language::use_language;
use crate::services::logging::Logger;

const NOTICE_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// The banner shows at most one notice; a newer one replaces it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeState {
    pub current: Option<(u32, Notice)>,
    next_id: u32,
}

pub enum NoticeAction {
    Show(Notice),
    Dismiss(u32),
}

impl Reducible for NoticeState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeAction::Show(notice) => Rc::new(NoticeState {
                current: Some((self.next_id, notice)),
                next_id: self.next_id.wrapping_add(1),
            }),
            NoticeAction::Dismiss(id) => match &self.current {
                Some((current, _)) if *current == id => Rc::new(NoticeState {
                    current: None,
                    next_id: self.next_id,
                }),
                _ => self,
            },
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct NoticeContext {
    pub notify: Callback<Notice>,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Html,
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let state = use_reducer(NoticeState::default);

    let notify = {
        let state = state.clone();
        use_callback((), move |notice: Notice, _| {
            state.dispatch(NoticeAction::Show(notice));
        })
    };

    // Auto-dismiss whichever notice is showing
    {
        let state = state.clone();
        let shown = state.current.as_ref().map(|(id, _)| *id);
        use_effect_with(shown, move |shown| {
            if let Some(id) = *shown {
                spawn_local(async move {
                    TimeoutFuture::new(NOTICE_MS).await;
                    state.dispatch(NoticeAction::Dismiss(id));
                });
            }
            || ()
        });
    }

    let banner = match &state.current {
        Some((id, notice)) => {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            let on_close = {
                let state = state.clone();
                let id = *id;
                Callback::from(move |_: MouseEvent| state.dispatch(NoticeAction::Dismiss(id)))
            };
            html! {
                <div class={class} role="status">
                    <span>{&notice.message}</span>
                    <button class="notice-close" onclick={on_close}>{"×"}</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<NoticeContext> context={NoticeContext { notify }}>
            {banner}
            {props.children.clone()}
        </ContextProvider<NoticeContext>>
    }
}

#[hook]
pub fn use_notice() -> Callback<Notice> {
    use_context::<NoticeContext>()
        .map(|ctx| ctx.notify)
        .unwrap_or_else(Callback::noop)
}

/// Turns a failed request into a notice; a rejected session also signs out
#[hook]
pub fn use_error_reporter(component: &'static str) -> Callback<ApiError> {
    let notify = use_notice();
    let auth = use_auth();
    let i18n = use_language();

    Callback::from(move |error: ApiError| {
        Logger::error_with_component(component, &error.to_string());
        if error.is_unauthorized() && auth.session.is_authenticated() {
            auth.actions.logout.emit(());
            notify.emit(Notice::error(i18n.t("auth.sessionExpired")));
        } else {
            notify.emit(Notice::error(error.user_message(i18n.lang)));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_newer_notice_replaces_older() {
        let state = Rc::new(NoticeState::default());
        let state = state.reduce(NoticeAction::Show(Notice::success("saved")));
        let state = state.reduce(NoticeAction::Show(Notice::error("failed")));
        let (id, notice) = state.current.clone().unwrap();
        assert_eq!(id, 1);
        assert_eq!(notice.message, "failed");
    }

    #[wasm_bindgen_test]
    fn test_stale_dismiss_is_ignored() {
        let state = Rc::new(NoticeState::default())
            .reduce(NoticeAction::Show(Notice::success("one")))
            .reduce(NoticeAction::Show(Notice::success("two")));
        let state = state.reduce(NoticeAction::Dismiss(0));
        assert!(state.current.is_some());
        let state = state.reduce(NoticeAction::Dismiss(1));
        assert!(state.current.is_none());
    }
}
