use gloo::dialogs::confirm;
use shared::{translate, ApiError, ChildFilter, ChildProfile, Route};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::edit_child_form::EditChildForm;
use crate::components::form_fields::SelectField;
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_children::{use_children, UseChildrenResult};
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_error_reporter, use_notice, Notice};
use crate::hooks::use_route::use_route;
use crate::services::date_utils::{child_age, display_date};

const FILTERS: [(ChildFilter, &str, &str); 4] = [
    (ChildFilter::All, "all", "filter.all"),
    (ChildFilter::Present, "present", "filter.present"),
    (ChildFilter::Enrolled, "enrolled", "filter.enrolled"),
    (ChildFilter::Waitlist, "waitlist", "filter.waitlist"),
];

fn filter_from(value: &str) -> ChildFilter {
    FILTERS
        .iter()
        .find(|(_, v, _)| *v == value)
        .map(|(filter, _, _)| *filter)
        .unwrap_or_default()
}

fn filter_value(filter: ChildFilter) -> &'static str {
    FILTERS
        .iter()
        .find(|(f, _, _)| *f == filter)
        .map(|(_, v, _)| *v)
        .unwrap_or("all")
}

#[derive(Properties, PartialEq)]
struct ChildCardProps {
    child: ChildProfile,
    on_open: Callback<i64>,
    on_delete: Callback<i64>,
}

#[function_component(ChildCard)]
fn child_card(props: &ChildCardProps) -> Html {
    let i18n = use_language();
    let child = &props.child;
    let id = child.id;

    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = id {
                on_open.emit(id);
            }
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(id) = id {
                on_delete.emit(id);
            }
        })
    };

    html! {
        <div class="card child-card clickable" {onclick}>
            <div class="child-card-header">
                <div class="avatar">{child.initials()}</div>
                <div>
                    <h3>{child.full_name()}</h3>
                    {if let Some(status) = child.status {
                        html! {
                            <span class={classes!("badge", format!("badge-{}", status.as_str()))}>
                                {i18n.t_owned(&format!("childStatus.{}", status))}
                            </span>
                        }
                    } else { html! {} }}
                </div>
            </div>
            <p><strong>{i18n.t("age")}{": "}</strong>
                {child_age(child.age.as_deref(), child.date_of_birth.as_deref(), i18n.lang)}</p>
            {if child.age_group.is_empty() { html! {} } else {
                html! { <p><strong>{i18n.t("ageGroup")}{": "}</strong>{&child.age_group}</p> }
            }}
            {if let Some(date) = child.enrollment_date.as_deref() {
                html! { <p><strong>{i18n.t("enrollmentDate")}{": "}</strong>{display_date(Some(date), i18n.lang)}</p> }
            } else { html! {} }}
            <div class="card-actions">
                <button class="btn btn-danger btn-small" onclick={on_delete} disabled={id.is_none()}>
                    {i18n.t("common.delete")}
                </button>
            </div>
        </div>
    }
}

#[function_component(ChildrenManagement)]
pub fn children_management() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let navigate = use_route().navigate;
    let report_error = use_error_reporter("children_management");

    let filter = use_state(ChildFilter::default);
    let search = use_state(String::new);
    let show_form = use_state(|| false);

    let UseChildrenResult { state, actions } = use_children(&auth.api(), *filter, report_error.clone());
    let visible = state.matching(&search);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(filter_from(&value)))
    };

    let on_open = Callback::from(move |id: i64| navigate.emit(Route::ChildProfile { id }));

    let on_delete = {
        let delete_child = actions.delete_child.clone();
        let lang = i18n.lang;
        Callback::from(move |id: i64| {
            if !confirm(translate(lang, "common.confirmDelete")) {
                return;
            }
            let notify = notify.clone();
            let report_error = report_error.clone();
            let done = Callback::from(move |result: Result<(), ApiError>| match result {
                Ok(()) => notify.emit(Notice::success(translate(lang, "childDeleted"))),
                Err(e) => report_error.emit(e),
            });
            delete_child.emit((id, done));
        })
    };

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(false))
    };

    let on_saved = {
        let show_form = show_form.clone();
        let refresh = actions.refresh.clone();
        Callback::from(move |_: ChildProfile| {
            show_form.set(false);
            refresh.emit(());
        })
    };

    let filter_options: Vec<(String, String)> = FILTERS
        .iter()
        .map(|(_, value, key)| (value.to_string(), i18n.t(*key).to_string()))
        .collect();

    html! {
        <div class="page children-management">
            <div class="page-header">
                <div>
                    <h1>{"👶 "}{i18n.t("childrenManagement")}</h1>
                    <p class="page-subtitle">{i18n.t("manageAllEnrolledChildren")}</p>
                </div>
                <button class="btn btn-primary" onclick={open_form}>{"➕ "}{i18n.t("addNewChild")}</button>
            </div>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder={i18n.t("searchChildren")}
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <SelectField
                    id="children-filter"
                    label={i18n.t("status")}
                    options={filter_options}
                    value={filter_value(*filter).to_string()}
                    on_change={on_filter}
                />
            </div>

            {if state.loading {
                html! { <LoadingRow /> }
            } else if visible.is_empty() {
                html! { <p class="empty-state">{i18n.t("common.noData")}</p> }
            } else {
                html! {
                    <div class="card-grid">
                        {for visible.into_iter().map(|child| html! {
                            <ChildCard child={child} on_open={on_open.clone()} on_delete={on_delete.clone()} />
                        })}
                    </div>
                }
            }}

            <EditChildForm
                is_open={*show_form}
                child={None::<ChildProfile>}
                on_close={close_form}
                on_saved={on_saved}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_filter_select_values() {
        assert_eq!(filter_from("waitlist"), ChildFilter::Waitlist);
        assert_eq!(filter_from("bogus"), ChildFilter::All);
        assert_eq!(filter_value(ChildFilter::Present), "present");
    }
}
