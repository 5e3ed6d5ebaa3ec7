use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>
                {props.label.clone()}
                {if props.required { html! { <span class="required">{" *"}</span> } } else { html! {} }}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(3)]
    pub rows: u32,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <textarea
                id={props.id.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                oninput={on_input}
            />
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <select id={props.id.clone()} onchange={on_select}>
                {if let Some(placeholder) = props.placeholder.as_ref() {
                    html! { <option value="" selected={props.value.is_empty()}>{placeholder.clone()}</option> }
                } else { html! {} }}
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label}</option>
                })}
            </select>
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckListProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Group of checkboxes over a fixed option list
#[function_component(CheckList)]
pub fn check_list(props: &CheckListProps) -> Html {
    html! {
        <fieldset class={classes!("check-list", props.error.is_some().then_some("has-error"))}>
            <legend>{props.label.clone()}</legend>
            {for props.options.iter().map(|(value, label)| {
                let checked = props.selected.contains(value);
                let input_id = format!("{}-{}", props.id, value);
                let onchange = {
                    let on_toggle = props.on_toggle.clone();
                    let value = value.clone();
                    Callback::from(move |_: Event| on_toggle.emit(value.clone()))
                };
                html! {
                    <label class="check-item" for={input_id.clone()}>
                        <input id={input_id} type="checkbox" checked={checked} {onchange} />
                        {label}
                    </label>
                }
            })}
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}
        </fieldset>
    }
}

/// Callback writing an input's value into a string state
pub fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

/// Callback writing an input's value into one field of a form state
pub fn update_with<T: Clone + 'static>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

/// `(value, label)` pairs where both are the same string
pub fn plain_options<S: AsRef<str>>(values: &[S]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}

/// Turns `some_snake_value` into "Some snake value" for option labels
pub fn humanize(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_humanize() {
        assert_eq!(humanize("out_of_school_care"), "Out of school care");
        assert_eq!(humanize(""), "");
    }

    #[wasm_bindgen_test]
    fn test_plain_options() {
        assert_eq!(
            plain_options(&["Asthma"]),
            vec![("Asthma".to_string(), "Asthma".to_string())]
        );
    }
}
