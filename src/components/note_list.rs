use crate::components::ui::{Button, ButtonSize, ButtonVariant, CardGrid, CardItem};
use crate::models::Note;
use crate::query::{Mutation, NOTES_SCOPE};
use crate::state::AppContext;
use leptos::logging::{error, log};
use leptos::prelude::*;

#[component]
pub fn NoteList(#[prop(into)] notes: Signal<Vec<Note>>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let client = StoredValue::new(app_state.0.note_client.clone());
    let bus = app_state.0.invalidation;
    let delete = Mutation::new();

    let on_delete = move |id: u64| {
        let c = client.get_value();
        delete.mutate(
            async move { c.delete(id).await },
            move |note: Note| {
                log!("deleted note {}", note.id);
                bus.emit(NOTES_SCOPE);
            },
            move |e| error!("Failed to delete note {id}: {e}"),
        );
    };

    view! {
        <Show when=move || delete.pending.get() fallback=|| ()>
            <p class="text-sm text-muted-foreground">"Deleting note..."</p>
        </Show>
        {move || delete.error.get().map(|e| view! {
            <p class="text-sm text-destructive">{format!("Error deleting note: {e}")}</p>
        })}

        <Show when=move || notes.with(|n| !n.is_empty()) fallback=|| ()>
            <CardGrid class="lg:grid-cols-3 xl:grid-cols-3">
                <For
                    each=move || notes.get()
                    key=|n| n.id
                    children=move |note: Note| {
                        let id = note.id;
                        view! {
                            <CardItem class="gap-2 p-4">
                                <h2 class="text-base font-semibold">{note.title}</h2>
                                <p class="flex-1 whitespace-pre-wrap text-sm text-muted-foreground">{note.content}</p>
                                <div class="flex items-center justify-between pt-2">
                                    <span class="rounded-full border px-2.5 py-0.5 text-xs">{note.tag.to_string()}</span>
                                    <Button
                                        variant=ButtonVariant::Destructive
                                        size=ButtonSize::Sm
                                        attr:disabled=move || delete.pending.get()
                                        on:click=move |_| on_delete(id)
                                    >
                                        "Delete"
                                    </Button>
                                </div>
                            </CardItem>
                        }
                    }
                />
            </CardGrid>
        </Show>
    }
}
