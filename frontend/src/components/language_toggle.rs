use yew::prelude::*;

use crate::hooks::use_language::use_language;

/// EN/FR switch; the choice is persisted by the provider
#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let i18n = use_language();
    let onclick = {
        let set_language = i18n.set_language.clone();
        let next = i18n.lang.toggle();
        Callback::from(move |_: MouseEvent| set_language.emit(next))
    };

    html! {
        <button class="btn btn-link language-toggle" {onclick} title="Language / Langue">
            {"🌐 "}{i18n.lang.toggle_label()}
        </button>
    }
}
