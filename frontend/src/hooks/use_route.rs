use gloo::events::EventListener;
use shared::Route;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct RouteContext {
    pub route: Route,
    pub navigate: Callback<Route>,
}

fn current_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    pub children: Html,
}

/// Hash router: `window.location.hash` is the single source of the route
#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let route = use_state(|| Route::parse(&current_hash()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
                route.set(Route::parse(&current_hash()));
            });
            move || drop(listener)
        });
    }

    let navigate = use_callback((), |next: Route, _| {
        Logger::debug_with_component("router", &format!("navigate to {}", next.to_path()));
        // The hashchange listener picks the new route up
        if let Err(e) = gloo::utils::window().location().set_hash(&next.to_path()) {
            Logger::error_with_component("router", &format!("failed to navigate: {:?}", e));
        }
    });

    let context = RouteContext {
        route: (*route).clone(),
        navigate,
    };

    html! {
        <ContextProvider<RouteContext> context={context}>
            {props.children.clone()}
        </ContextProvider<RouteContext>>
    }
}

#[hook]
pub fn use_route() -> RouteContext {
    use_context::<RouteContext>().unwrap_or_else(|| RouteContext {
        route: Route::Landing,
        navigate: Callback::noop(),
    })
}

/// Callback that navigates to a fixed route, for links and buttons
#[hook]
pub fn use_link(to: Route) -> Callback<MouseEvent> {
    let navigate = use_route().navigate;
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(to.clone());
    })
}
