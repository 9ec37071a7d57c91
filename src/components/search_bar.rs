use crate::components::ui::{Button, Input};
use crate::state::AppContext;
use leptos::prelude::*;

/// Movie search: submits on Enter / button, never on keystrokes.
#[component]
pub fn SearchBar(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let notifier = app_state.0.notifier;
    let query: RwSignal<String> = RwSignal::new(String::new());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            notifier.error("Please enter your search query.");
            return;
        }
        on_submit.run(q);
    };

    view! {
        <header class="border-b bg-card">
            <div class="mx-auto flex w-full max-w-[1080px] items-center justify-between gap-4 px-4 py-4">
                <a
                    class="text-sm font-medium text-muted-foreground hover:text-foreground"
                    href="https://www.themoviedb.org/"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Powered by TMDB"
                </a>
                <form class="flex w-full max-w-md items-center gap-2" on:submit=on_form_submit>
                    <Input
                        name="query"
                        placeholder="Search movies..."
                        autocomplete="off"
                        autofocus=true
                        bind_value=query
                    />
                    <Button>"Search"</Button>
                </form>
            </div>
        </header>
    }
}
