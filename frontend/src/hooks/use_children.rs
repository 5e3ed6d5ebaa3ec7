use shared::{ApiError, ChildFilter, ChildProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ChildrenState {
    pub children: Vec<ChildProfile>,
    pub loading: bool,
}

impl ChildrenState {
    /// Children whose name matches the search box
    pub fn matching(&self, search: &str) -> Vec<ChildProfile> {
        self.children
            .iter()
            .filter(|child| child.matches_search(search))
            .cloned()
            .collect()
    }
}

pub struct UseChildrenResult {
    pub state: ChildrenState,
    pub actions: UseChildrenActions,
}

#[derive(Clone, PartialEq)]
pub struct UseChildrenActions {
    pub refresh: Callback<()>,
    pub delete_child: Callback<(i64, Callback<Result<(), ApiError>>)>,
}

/// Children of the signed-in daycare, reloaded whenever `filter` changes
#[hook]
pub fn use_children(api: &ApiClient, filter: ChildFilter, on_error: Callback<ApiError>) -> UseChildrenResult {
    let children = use_state(Vec::<ChildProfile>::new);
    let loading = use_state(|| false);

    let refresh = {
        let children = children.clone();
        let loading = loading.clone();
        let on_error = on_error.clone();
        use_callback((api.clone(), filter), move |_: (), (api, filter)| {
            let api = api.clone();
            let filter = *filter;
            let children = children.clone();
            let loading = loading.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                loading.set(true);
                match api.children(filter).await {
                    Ok(list) => children.set(list),
                    Err(e) => on_error.emit(e),
                }
                loading.set(false);
            });
        })
    };

    let delete_child = {
        let refresh = refresh.clone();
        use_callback(api.clone(), move |(id, done): (i64, Callback<Result<(), ApiError>>), api| {
            let api = api.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = api.delete_child(id).await;
                if result.is_ok() {
                    refresh.emit(());
                }
                done.emit(result);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(filter, move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseChildrenResult {
        state: ChildrenState {
            children: (*children).clone(),
            loading: *loading,
        },
        actions: UseChildrenActions { refresh, delete_child },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_matching_filters_by_name() {
        let child = |first: &str, last: &str| ChildProfile {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..ChildProfile::default()
        };
        let state = ChildrenState {
            children: vec![child("Emma", "Tremblay"), child("Noah", "Gagnon")],
            loading: false,
        };
        assert_eq!(state.matching("gag").len(), 1);
        assert_eq!(state.matching("").len(), 2);
    }
}
