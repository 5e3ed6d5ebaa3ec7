use yew::prelude::*;

use crate::hooks::use_language::use_language;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let i18n = use_language();
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>{i18n.t("common.loading")}</p>
        </div>
    }
}

/// Inline placeholder for a section still fetching
#[function_component(LoadingRow)]
pub fn loading_row() -> Html {
    let i18n = use_language();
    html! { <div class="loading">{i18n.t("common.loading")}</div> }
}
