mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::app_router::AppRouter;
use hooks::use_auth::AuthProvider;
use hooks::use_language::LanguageProvider;
use hooks::use_notice::NoticeProvider;
use hooks::use_route::RouterProvider;
use hooks::use_subscription::SubscriptionProvider;
use services::config::AppConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    html! {
        <LanguageProvider>
            <RouterProvider>
                <AuthProvider>
                    <NoticeProvider>
                        <SubscriptionProvider>
                            <AppRouter />
                        </SubscriptionProvider>
                    </NoticeProvider>
                </AuthProvider>
            </RouterProvider>
        </LanguageProvider>
    }
}

fn main() {
    let config = AppConfig::load();
    Logger::init(config.log_level);
    Logger::info_with_component("main", &format!("CareConnect client using API {}", config.api_url));
    yew::Renderer::<App>::new().render();
}
