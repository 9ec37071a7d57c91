//! Small client-side query layer: keyed cache with stale-while-revalidate,
//! explicit invalidation events and single-flight mutations.

mod cache;
mod notice;

pub(crate) use cache::{CachePlan, Generations, QueryCache, QueryKey};
pub(crate) use notice::EmptyResultNotice;

use crate::api::{ApiError, ApiResult};
use crate::util::now_ms;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub(crate) const MOVIES_SCOPE: &str = "movies";
pub(crate) const NOTES_SCOPE: &str = "notes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// "List changed" events, one counter per scope. Queries subscribe by reading
/// the counter of their scope; mutations publish via [`InvalidationBus::emit`].
#[derive(Clone, Copy)]
pub(crate) struct InvalidationBus(RwSignal<Generations>);

impl InvalidationBus {
    pub fn new() -> Self {
        Self(RwSignal::new(Generations::default()))
    }

    pub fn emit(&self, scope: &'static str) {
        self.0.update(|g| {
            let generation = g.bump(scope);
            log!("invalidated {scope} (generation {generation})");
        });
    }

    /// Tracked read.
    pub fn generation(&self, scope: &str) -> u64 {
        self.0.with(|g| g.get(scope))
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct QueryHandle<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub status: RwSignal<QueryStatus>,
    pub error: RwSignal<Option<String>>,
    pub is_fetching: RwSignal<bool>,
    /// True while `data` belongs to a previous key and the current key is loading.
    pub is_placeholder: RwSignal<bool>,
    /// Bumped each time `data` starts showing a different key, whether the data
    /// came from the cache or the network. Stays put for refreshes of the shown key.
    pub delivered: RwSignal<Option<u64>>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Clone + Send + Sync + 'static> QueryHandle<T> {
    pub fn is_loading(&self) -> bool {
        self.status.get() == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status.get() == QueryStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status.get() == QueryStatus::Success
    }
}

/// Keyed, cached fetch. `key` returning `None` disables the query.
///
/// Re-runs whenever `key` or the scope's invalidation generation changes.
/// Responses for keys that have since been superseded are dropped.
pub(crate) fn use_query<T, K, F, Fut>(
    cache: StoredValue<QueryCache<T>>,
    bus: InvalidationBus,
    key: K,
    fetch: F,
) -> QueryHandle<T>
where
    T: Clone + Send + Sync + 'static,
    K: Fn() -> Option<QueryKey> + 'static,
    F: Fn(QueryKey) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let handle = QueryHandle {
        data: RwSignal::new(None),
        status: RwSignal::new(QueryStatus::Idle),
        error: RwSignal::new(None),
        is_fetching: RwSignal::new(false),
        is_placeholder: RwSignal::new(false),
        delivered: RwSignal::new(None),
    };
    let request_id = StoredValue::new(0u64);
    let shown_key: StoredValue<Option<QueryKey>> = StoredValue::new(None);

    let deliver = move |key: QueryKey, data: T| {
        let changed = shown_key
            .try_update_value(|shown| {
                let changed = shown.as_ref() != Some(&key);
                *shown = Some(key);
                changed
            })
            .unwrap_or(false);
        handle.data.set(Some(data));
        if changed {
            handle
                .delivered
                .update(|d| *d = Some(d.map_or(1, |n| n.saturating_add(1))));
        }
    };

    Effect::new(move |_| {
        let Some(key) = key() else {
            request_id.update_value(|id| *id = id.saturating_add(1));
            handle.is_fetching.set(false);
            if handle.data.get_untracked().is_none() {
                handle.status.set(QueryStatus::Idle);
            }
            return;
        };

        let generation = bus.generation(key.scope);
        let id = request_id.get_value().saturating_add(1);
        request_id.set_value(id);

        match cache.with_value(|c| c.plan(&key, generation, now_ms())) {
            CachePlan::Fresh(data) => {
                deliver(key, data);
                handle.status.set(QueryStatus::Success);
                handle.error.set(None);
                handle.is_fetching.set(false);
                handle.is_placeholder.set(false);
                return;
            }
            CachePlan::Revalidate(data) => {
                deliver(key.clone(), data);
                handle.status.set(QueryStatus::Success);
                handle.is_placeholder.set(false);
            }
            CachePlan::Fetch => {
                if handle.data.get_untracked().is_some() {
                    handle.status.set(QueryStatus::Success);
                    handle.is_placeholder.set(true);
                } else {
                    handle.status.set(QueryStatus::Loading);
                }
            }
        }

        handle.error.set(None);
        handle.is_fetching.set(true);

        let fut = fetch(key.clone());
        spawn_local(async move {
            let result = fut.await;

            if request_id.try_get_value() != Some(id) {
                return;
            }

            match result {
                Ok(data) => {
                    cache.update_value(|c| c.insert(key.clone(), data.clone(), generation, now_ms()));
                    deliver(key, data);
                    handle.status.set(QueryStatus::Success);
                }
                Err(e) => {
                    error!("query {:?} failed: {}", key, e);
                    handle.error.set(Some(e.to_string()));
                    handle.status.set(QueryStatus::Error);
                }
            }
            handle.is_fetching.set(false);
            handle.is_placeholder.set(false);
        });
    });

    handle
}

/// State-changing request with a pending gate: while one is in flight further
/// calls are refused.
#[derive(Clone, Copy)]
pub(crate) struct Mutation {
    pub pending: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl Mutation {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Returns `false` (and drops `fut` unpolled) when another call is still pending.
    pub fn mutate<T, Fut>(
        &self,
        fut: Fut,
        on_success: impl FnOnce(T) + 'static,
        on_error: impl FnOnce(ApiError) + 'static,
    ) -> bool
    where
        T: 'static,
        Fut: Future<Output = ApiResult<T>> + 'static,
    {
        if self.pending.get_untracked() {
            return false;
        }

        let Self { pending, error: error_text } = *self;
        pending.set(true);
        error_text.set(None);

        spawn_local(async move {
            match fut.await {
                Ok(v) => on_success(v),
                Err(e) => {
                    let _ = error_text.try_set(Some(e.to_string()));
                    on_error(e);
                }
            }
            let _ = pending.try_set(false);
        });
        true
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self::new()
    }
}
