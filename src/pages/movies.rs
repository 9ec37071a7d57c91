use crate::components::ui::Spinner;
use crate::components::{ErrorMessage, Loader, MovieGrid, MovieModal, Pagination, SearchBar};
use crate::models::{Movie, MovieResponse};
use crate::query::{use_query, EmptyResultNotice, QueryKey, MOVIES_SCOPE};
use crate::state::{AppContext, SearchState};
use leptos::prelude::*;

#[component]
pub fn MoviesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let notifier = app_state.0.notifier;
    let client = app_state.0.movie_client.clone();

    let search: RwSignal<SearchState> = RwSignal::new(SearchState::default());
    let selected: RwSignal<Option<Movie>> = RwSignal::new(None);

    // Disabled until there is something to search for.
    let movies = use_query(
        app_state.0.movie_cache,
        app_state.0.invalidation,
        move || {
            search.with(|s| {
                (!s.text.is_empty()).then(|| QueryKey::new(MOVIES_SCOPE, s.text.clone(), s.page))
            })
        },
        move |key: QueryKey| {
            let client = client.clone();
            async move { client.search(&key.search, key.page).await }
        },
    );

    let notice = StoredValue::new(EmptyResultNotice::default());
    Effect::new(move |_| {
        let delivery = movies.delivered.get();
        let is_empty = movies
            .data
            .with(|d| d.as_ref().is_some_and(|r| r.results.is_empty()));

        if notice
            .try_update_value(|n| n.observe(delivery, is_empty))
            .unwrap_or(false)
        {
            notifier.error("No movies found for your request.");
        }
    });

    let results = Signal::derive(move || {
        movies
            .data
            .with(|d| d.as_ref().map(|r| r.results.clone()).unwrap_or_default())
    });
    let total_pages = Signal::derive(move || {
        movies
            .data
            .with(|d| d.as_ref().map(|r: &MovieResponse| r.total_pages).unwrap_or(0))
    });
    let current_page = Signal::derive(move || search.with(|s| s.page));

    view! {
        <div class="min-h-screen bg-background">
            <SearchBar on_submit=move |q: String| search.update(|s| s.search(&q)) />

            <main class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <Show when=move || movies.is_fetching.get() && !movies.is_loading() fallback=|| ()>
                    <div class="flex justify-end">
                        <Spinner class="text-muted-foreground" />
                    </div>
                </Show>
                <Show when=move || movies.is_loading() fallback=|| ()>
                    <Loader label="Loading movies, please wait..." />
                </Show>
                <Show when=move || movies.is_error() fallback=|| ()>
                    <ErrorMessage />
                </Show>
                <Show when=move || movies.is_success() fallback=|| ()>
                    <MovieGrid movies=results on_select=move |m: Movie| selected.set(Some(m)) />
                </Show>
                <Show when=move || movies.is_success() fallback=|| ()>
                    <Pagination
                        total_pages=total_pages
                        current_page=current_page
                        on_page_change=move |p: u32| search.update(|s| s.set_page(p))
                    />
                </Show>
            </main>

            {move || {
                selected
                    .get()
                    .map(|movie| view! { <MovieModal movie=movie on_close=move |_: ()| selected.set(None) /> })
            }}
        </div>
    }
}
