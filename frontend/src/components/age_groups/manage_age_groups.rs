use gloo::dialogs::confirm;
use shared::validation::{error_for, summarize, validate_age_group, FieldError};
use shared::{translate, AgeGroup, AgeGroupDraft};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{update_with, TextArea, TextField};
use crate::components::loading::LoadingRow;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_language::use_language;
use crate::hooks::use_notice::{use_error_reporter, use_notice, Notice};

/// Editing state; month bounds stay text until submit
#[derive(Clone, PartialEq, Default)]
struct AgeGroupForm {
    id: Option<i64>,
    name: String,
    min_months: String,
    max_months: String,
    description: String,
}

impl AgeGroupForm {
    fn from_group(group: &AgeGroup) -> Self {
        let draft = AgeGroupDraft::from(group);
        Self {
            id: draft.id,
            name: draft.name,
            min_months: draft.min_age_months.map(|m| m.to_string()).unwrap_or_default(),
            max_months: draft.max_age_months.map(|m| m.to_string()).unwrap_or_default(),
            description: draft.description,
        }
    }

    fn to_draft(&self) -> AgeGroupDraft {
        AgeGroupDraft {
            id: self.id,
            name: self.name.trim().to_string(),
            min_age_months: self.min_months.trim().parse().ok(),
            max_age_months: self.max_months.trim().parse().ok(),
            description: self.description.trim().to_string(),
        }
    }
}

#[function_component(ManageAgeGroups)]
pub fn manage_age_groups() -> Html {
    let auth = use_auth();
    let i18n = use_language();
    let notify = use_notice();
    let report_error = use_error_reporter("manage_age_groups");
    let lang = i18n.lang;

    let groups = use_state(Vec::<AgeGroup>::new);
    let form = use_state(AgeGroupForm::default);
    let loading = use_state(|| true);
    let editing = use_state(|| false);
    let errors = use_state(Vec::<FieldError>::new);
    let reload = use_state(|| 0u32);

    {
        let groups = groups.clone();
        let loading = loading.clone();
        let report_error = report_error.clone();
        use_effect_with((auth.api(), *reload), move |(api, _)| {
            let api = api.clone();
            spawn_local(async move {
                match api.age_groups().await {
                    Ok(list) => groups.set(list),
                    Err(e) => report_error.emit(e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let start_new = {
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(AgeGroupForm::default());
            errors.set(Vec::new());
            editing.set(true);
        })
    };

    let cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        let api = auth.api();
        let notify = notify.clone();
        let report_error = report_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = form.to_draft();
            let problems = validate_age_group(&draft);
            if let Some(summary) = summarize(&problems) {
                notify.emit(Notice::error(summary.user_message(lang)));
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());

            let api = api.clone();
            let editing = editing.clone();
            let reload = reload.clone();
            let notify = notify.clone();
            let report_error = report_error.clone();
            spawn_local(async move {
                match api.save_age_group(&draft).await {
                    Ok(()) => {
                        editing.set(false);
                        notify.emit(Notice::success(translate(lang, "ageGroups.saved")));
                        reload.set(*reload + 1);
                    }
                    Err(e) => report_error.emit(e),
                }
            });
        })
    };

    let field_error =
        |field: &str| error_for(&errors, field).map(|code| translate(lang, &code.message_key()).to_string());

    let editor = if *editing {
        html! {
            <form class="card age-group-form" onsubmit={on_submit}>
                <h2>{if form.id.is_some() { i18n.t("common.edit") } else { i18n.t("ageGroups.new") }}</h2>
                <TextField id="age-group-name" label={i18n.t("name")} required=true
                    value={form.name.clone()} error={field_error("name")}
                    on_change={update_with(&form, |f: &mut AgeGroupForm, v: String| f.name = v)} />
                <div class="form-row">
                    <TextField id="age-group-min" label={i18n.t("ageGroups.minMonths")} input_type="number"
                        value={form.min_months.clone()}
                        on_change={update_with(&form, |f: &mut AgeGroupForm, v: String| f.min_months = v)} />
                    <TextField id="age-group-max" label={i18n.t("ageGroups.maxMonths")} input_type="number"
                        value={form.max_months.clone()} error={field_error("max_age_months")}
                        on_change={update_with(&form, |f: &mut AgeGroupForm, v: String| f.max_months = v)} />
                </div>
                <TextArea id="age-group-description" label={i18n.t("registration.description")}
                    value={form.description.clone()}
                    on_change={update_with(&form, |f: &mut AgeGroupForm, v: String| f.description = v)} />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{i18n.t("common.save")}</button>
                    <button type="button" class="btn btn-secondary" onclick={cancel}>{i18n.t("common.cancel")}</button>
                </div>
            </form>
        }
    } else {
        html! {}
    };

    html! {
        <div class="page manage-age-groups">
            <div class="page-header">
                <h1>{"🧸 "}{i18n.t("ageGroups.title")}</h1>
                <button class="btn btn-primary" onclick={start_new}>{"➕ "}{i18n.t("ageGroups.new")}</button>
            </div>

            {editor}

            {if *loading {
                html! { <LoadingRow /> }
            } else if groups.is_empty() {
                html! { <p class="empty-state">{i18n.t("ageGroups.empty")}</p> }
            } else {
                html! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{i18n.t("name")}</th>
                                <th>{i18n.t("ageGroup")}</th>
                                <th>{i18n.t("registration.description")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for groups.iter().map(|group| {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let form = form.clone();
                                    let errors = errors.clone();
                                    let group = group.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        form.set(AgeGroupForm::from_group(&group));
                                        errors.set(Vec::new());
                                        editing.set(true);
                                    })
                                };
                                let on_delete = {
                                    let api = auth.api();
                                    let reload = reload.clone();
                                    let notify = notify.clone();
                                    let report_error = report_error.clone();
                                    let id = group.id;
                                    Callback::from(move |_: MouseEvent| {
                                        if !confirm(translate(lang, "common.confirmDelete")) {
                                            return;
                                        }
                                        let api = api.clone();
                                        let reload = reload.clone();
                                        let notify = notify.clone();
                                        let report_error = report_error.clone();
                                        spawn_local(async move {
                                            match api.delete_age_group(id).await {
                                                Ok(()) => {
                                                    notify.emit(Notice::success(translate(lang, "ageGroups.deleted")));
                                                    reload.set(*reload + 1);
                                                }
                                                Err(e) => report_error.emit(e),
                                            }
                                        });
                                    })
                                };
                                html! {
                                    <tr key={group.id}>
                                        <td>{&group.name}</td>
                                        <td>{group.range_label()}</td>
                                        <td class="muted">{group.description.clone().unwrap_or_default()}</td>
                                        <td class="row-actions">
                                            <button class="btn btn-link" onclick={on_edit}>{i18n.t("common.edit")}</button>
                                            <button class="btn btn-link danger" onclick={on_delete}>{i18n.t("common.delete")}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_form_round_trips_through_draft() {
        let group = AgeGroup {
            id: 5,
            name: "Toddlers".to_string(),
            min_age_months: Some(18),
            max_age_months: Some(36),
            description: None,
            is_active: Some(true),
        };
        let form = AgeGroupForm::from_group(&group);
        assert_eq!(form.min_months, "18");
        let draft = form.to_draft();
        assert_eq!(draft.id, Some(5));
        assert_eq!(draft.max_age_months, Some(36));
        assert_eq!(draft.description, "");
    }

    #[wasm_bindgen_test]
    fn test_blank_bounds_are_unset() {
        let form = AgeGroupForm {
            name: " Infants ".to_string(),
            min_months: "".to_string(),
            max_months: "abc".to_string(),
            ..AgeGroupForm::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.name, "Infants");
        assert_eq!(draft.min_age_months, None);
        assert_eq!(draft.max_age_months, None);
    }
}
