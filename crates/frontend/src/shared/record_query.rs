//! Single-record fetch keyed by the `:id` route parameter.

use contracts::shared::api_error::ApiError;
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use std::future::Future;

pub struct RecordQuery<T: Send + Sync + 'static> {
    pub id: Memo<String>,
    pub state: RwSignal<QueryState<T>>,
    refetch_tick: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for RecordQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RecordQuery<T> {}

impl<T: Clone + Send + Sync + 'static> RecordQuery<T> {
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data().cloned())
    }

    /// Fetch again, keeping the current data on screen until it arrives
    pub fn refetch(&self) {
        self.refetch_tick.update(|n| *n = n.wrapping_add(1));
    }
}

pub fn use_record_query<T, F, Fut>(fetch: F) -> RecordQuery<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let state = RwSignal::new(QueryState::<T>::Loading);
    let refetch_tick = RwSignal::new(0u32);
    let generation = StoredValue::new(0u64);

    Effect::new(move |previous_id: Option<String>| {
        let current_id = id.get();
        refetch_tick.track();

        // A different record starts from the spinner; a refetch keeps the data
        if previous_id.as_ref() != Some(&current_id) {
            state.set(QueryState::Loading);
        }
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        let request = fetch(current_id.clone());
        spawn_local(async move {
            let outcome = request.await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            if let Err(e) = &outcome {
                log::warn!("Record fetch failed: {}", e);
            }
            state.set(QueryState::from_result(outcome));
        });

        current_id
    });

    RecordQuery {
        id,
        state,
        refetch_tick,
    }
}
