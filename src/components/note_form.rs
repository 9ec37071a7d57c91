use crate::components::hooks::{field_id, use_field_id};
use crate::components::ui::{Button, FieldError, Input, Label, Spinner, Textarea};
use crate::models::{Note, NoteTag};
use crate::query::{Mutation, NOTES_SCOPE};
use crate::state::AppContext;
use crate::validation::{validate_note_form, NoteFormErrors, NoteFormValues};
use leptos::logging::{error, log};
use leptos::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub fn NoteForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let client = StoredValue::new(app_state.0.note_client.clone());
    let bus = app_state.0.invalidation;
    let notifier = app_state.0.notifier;

    let form_id = use_field_id("note_form");
    let title_id = field_id(&form_id, "title");
    let content_id = field_id(&form_id, "content");
    let tag_id = field_id(&form_id, "tag");

    let initial = NoteFormValues::default();
    let title: RwSignal<String> = RwSignal::new(initial.title);
    let content: RwSignal<String> = RwSignal::new(initial.content);
    let tag: RwSignal<String> = RwSignal::new(initial.tag);

    let errors: RwSignal<NoteFormErrors> = RwSignal::new(NoteFormErrors::default());
    let submitted: RwSignal<bool> = RwSignal::new(false);
    let create = Mutation::new();

    // After the first submit attempt, errors follow the input live.
    Effect::new(move |_| {
        let values = NoteFormValues {
            title: title.get(),
            content: content.get(),
            tag: tag.get(),
        };
        if submitted.get() {
            errors.set(validate_note_form(&values).err().unwrap_or_default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);

        let values = NoteFormValues {
            title: title.get_untracked(),
            content: content.get_untracked(),
            tag: tag.get_untracked(),
        };
        let payload = match validate_note_form(&values) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(NoteFormErrors::default());

        let c = client.get_value();
        create.mutate(
            async move { c.create(&payload).await },
            move |note: Note| {
                log!("created note {}", note.id);
                on_close.run(());
                bus.emit(NOTES_SCOPE);
                notifier.info("Note created.");
            },
            |e| {
                error!("Failed to create note: {e}");
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message("Failed to create note. Please try again.");
                }
            },
        );
    };

    let title_error = move || errors.with(|e| e.title.clone());
    let content_error = move || errors.with(|e| e.content.clone());
    let tag_error = move || errors.with(|e| e.tag.clone());

    view! {
        <form class="flex flex-col gap-4" on:submit=on_submit novalidate=true>
            <h2 class="text-lg font-semibold">"New note"</h2>

            <div class="flex flex-col gap-2">
                <Label html_for=title_id.clone()>"Title"</Label>
                <Input
                    id=title_id
                    name="title"
                    bind_value=title
                    invalid=Signal::derive(move || title_error().is_some())
                />
                {move || title_error().map(|m| view! { <FieldError>{m}</FieldError> })}
            </div>

            <div class="flex flex-col gap-2">
                <Label html_for=content_id.clone()>"Content"</Label>
                <Textarea
                    id=content_id
                    name="content"
                    rows=8
                    bind_value=content
                    invalid=Signal::derive(move || content_error().is_some())
                />
                {move || content_error().map(|m| view! { <FieldError>{m}</FieldError> })}
            </div>

            <div class="flex flex-col gap-2">
                <Label html_for=tag_id.clone()>"Tag"</Label>
                <select
                    id=tag_id
                    name="tag"
                    class="h-9 w-full rounded-md border border-input bg-transparent px-3 text-sm shadow-xs outline-none focus-visible:ring-2 focus-visible:ring-ring/50"
                    prop:value=move || tag.get()
                    on:change=move |ev| tag.set(event_target_value(&ev))
                >
                    {NoteTag::iter()
                        .map(|t| view! { <option value=t.to_string()>{t.to_string()}</option> })
                        .collect_view()}
                </select>
                {move || tag_error().map(|m| view! { <FieldError>{m}</FieldError> })}
            </div>

            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex h-9 items-center justify-center rounded-md border bg-background px-4 text-sm font-medium shadow-xs hover:bg-accent hover:text-accent-foreground"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
                <Button attr:disabled=move || create.pending.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || create.pending.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if create.pending.get() { "Creating..." } else { "Create note" }}
                    </span>
                </Button>
            </div>
        </form>
    }
}
