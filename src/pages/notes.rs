use crate::api::DEFAULT_NOTES_PER_PAGE;
use crate::components::ui::{Button, Spinner};
use crate::components::{ErrorMessage, Loader, NoteList, NoteModal, Pagination, SearchBox};
use crate::models::Note;
use crate::query::{use_query, QueryKey, NOTES_SCOPE};
use crate::state::{AppContext, SearchState};
use leptos::prelude::*;

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let client = app_state.0.note_client.clone();

    let search: RwSignal<SearchState> = RwSignal::new(SearchState::default());
    let modal_open: RwSignal<bool> = RwSignal::new(false);

    let notes = use_query(
        app_state.0.note_cache,
        app_state.0.invalidation,
        move || Some(search.with(|s| QueryKey::new(NOTES_SCOPE, s.text.clone(), s.page))),
        move |key: QueryKey| {
            let client = client.clone();
            async move {
                client
                    .list(&key.search, key.page, DEFAULT_NOTES_PER_PAGE)
                    .await
            }
        },
    );

    let items = Signal::derive(move || {
        notes
            .data
            .with(|d| d.as_ref().map(|r| r.notes.clone()).unwrap_or_default())
    });
    let total_pages = Signal::derive(move || {
        notes
            .data
            .with(|d| d.as_ref().map(|r| r.total_pages).unwrap_or(0))
    });
    let current_page = Signal::derive(move || search.with(|s| s.page));
    let has_notes = move || items.with(|n: &Vec<Note>| !n.is_empty());

    view! {
        <div class="min-h-screen bg-background">
            <header class="border-b bg-card">
                <div class="mx-auto flex w-full max-w-[1080px] items-center justify-between gap-4 px-4 py-4">
                    <SearchBox on_change=move |text: String| search.update(|s| s.search(&text)) />
                    <Button on:click=move |_| modal_open.set(true)>"Create note +"</Button>
                </div>
            </header>

            <main class="mx-auto w-full max-w-[1080px] space-y-4 px-4 py-8">
                <Show when=move || notes.is_fetching.get() && !notes.is_loading() fallback=|| ()>
                    <div class="flex justify-end">
                        <Spinner class="text-muted-foreground" />
                    </div>
                </Show>
                <Show when=move || notes.is_loading() fallback=|| ()>
                    <Loader label="Loading notes..." />
                </Show>
                <Show when=move || notes.is_error() fallback=|| ()>
                    {move || view! { <ErrorMessage detail=notes.error.get() /> }}
                </Show>
                <Show when=move || notes.is_success() && has_notes() fallback=|| ()>
                    <NoteList notes=items />
                </Show>
                <Show when=move || notes.is_success() fallback=|| ()>
                    <Pagination
                        total_pages=total_pages
                        current_page=current_page
                        on_page_change=move |p: u32| search.update(|s| s.set_page(p))
                    />
                </Show>
            </main>

            <Show when=move || modal_open.get() fallback=|| ()>
                <NoteModal on_close=move |_: ()| modal_open.set(false) />
            </Show>
        </div>
    }
}
