use shared::{translate, Language};
use yew::prelude::*;

use crate::services::config::AppConfig;
use crate::services::storage;

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub lang: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.lang, key)
    }

    /// Lookup for keys built at runtime (`childStatus.{status}`)
    pub fn t_owned(&self, key: &str) -> String {
        translate(self.lang, key).to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let lang = use_state(|| storage::load_language().unwrap_or(AppConfig::load().default_language));

    let set_language = {
        let lang = lang.clone();
        use_callback((), move |next: Language, _| {
            storage::save_language(next);
            lang.set(next);
        })
    };

    let context = LanguageContext {
        lang: *lang,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        lang: Language::En,
        set_language: Callback::noop(),
    })
}
