use shared::{ApiError, DaycareStats, Incident};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

const RECENT_INCIDENTS: usize = 5;

#[derive(Clone, PartialEq, Default)]
pub struct DaycareOverview {
    pub stats: DaycareStats,
    pub recent_incidents: Vec<Incident>,
}

impl DaycareOverview {
    /// Open incidents as counted by the backend, else the recent list length
    pub fn incident_count(&self) -> u32 {
        self.stats
            .open_incidents
            .unwrap_or(self.recent_incidents.len() as u32)
    }
}

pub struct UseDaycareStatsResult {
    pub overview: DaycareOverview,
    pub loading: bool,
}

/// Counters and recent incidents for the daycare dashboard, reloaded with the token
#[hook]
pub fn use_daycare_stats(api: &ApiClient, on_error: Callback<ApiError>) -> UseDaycareStatsResult {
    let overview = use_state(DaycareOverview::default);
    let loading = use_state(|| true);

    {
        let overview = overview.clone();
        let loading = loading.clone();
        use_effect_with(api.clone(), move |api| {
            let api = api.clone();
            spawn_local(async move {
                loading.set(true);
                let stats = match api.child_stats().await {
                    Ok(stats) => stats,
                    Err(e) => {
                        on_error.emit(e);
                        DaycareStats::default()
                    }
                };
                // Incidents are secondary here; a failure only empties the list
                let mut recent_incidents = api.incidents(true).await.unwrap_or_default();
                recent_incidents.truncate(RECENT_INCIDENTS);
                overview.set(DaycareOverview { stats, recent_incidents });
                loading.set(false);
            });
            || ()
        });
    }

    UseDaycareStatsResult {
        overview: (*overview).clone(),
        loading: *loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_incident_count_prefers_backend_counter() {
        let overview = DaycareOverview {
            stats: DaycareStats { open_incidents: Some(7), ..DaycareStats::default() },
            recent_incidents: vec![Incident::default()],
        };
        assert_eq!(overview.incident_count(), 7);

        let fallback = DaycareOverview {
            recent_incidents: vec![Incident::default(), Incident::default()],
            ..DaycareOverview::default()
        };
        assert_eq!(fallback.incident_count(), 2);
    }
}
