use crate::components::hooks::use_debounce;
use crate::components::ui::Input;
use leptos::prelude::*;
use std::time::Duration;

pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Notes search: reports the trimmed text once typing pauses.
#[component]
pub fn SearchBox(#[prop(into)] on_change: Callback<String>) -> impl IntoView {
    let text: RwSignal<String> = RwSignal::new(String::new());
    let debounced = use_debounce(
        SEARCH_DEBOUNCE,
        Callback::new(move |value: String| on_change.run(value.trim().to_string())),
    );

    // Skip the initial run: only user edits are forwarded.
    Effect::new(move |prev: Option<String>| {
        let value = text.get();
        if prev.is_some_and(|p| p != value) {
            debounced.run(value.clone());
        }
        value
    });

    view! {
        <Input
            class="max-w-xs"
            r#type="search"
            name="search"
            placeholder="Search notes"
            autocomplete="off"
            bind_value=text
        />
    }
}
