use crate::api::{MovieClient, NoteClient};
use crate::components::ui::Notifier;
use crate::config::EnvConfig;
use crate::models::{MovieResponse, NoteListResponse};
use crate::query::{InvalidationBus, QueryCache};
use leptos::prelude::*;

const MOVIES_STALE_MS: i64 = 5 * 60 * 1000;
const NOTES_STALE_MS: i64 = 0;

#[derive(Clone)]
pub(crate) struct AppState {
    pub movie_client: MovieClient,
    pub note_client: NoteClient,

    /// Cached responses, shared by every page instance.
    pub movie_cache: StoredValue<QueryCache<MovieResponse>>,
    pub note_cache: StoredValue<QueryCache<NoteListResponse>>,

    pub invalidation: InvalidationBus,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            movie_client: MovieClient::new(config),
            note_client: NoteClient::new(config),
            movie_cache: StoredValue::new(QueryCache::new(MOVIES_STALE_MS)),
            note_cache: StoredValue::new(QueryCache::new(NOTES_STALE_MS)),
            invalidation: InvalidationBus::new(),
            notifier: Notifier::new(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// (search text, page) pair that keys a list query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SearchState {
    pub text: String,
    pub page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl SearchState {
    /// New search text always starts from the first page.
    pub fn search(&mut self, text: &str) {
        self.text = text.trim().to_string();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}
