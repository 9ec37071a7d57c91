use crate::components::ui::Toaster;
use crate::config::EnvConfig;
use crate::pages::{HomePage, MoviesPage, NotesPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="border-b bg-card">
            <div class="mx-auto flex w-full max-w-[1080px] items-center gap-4 px-4 py-3 text-sm">
                <A href="/" attr:class="font-semibold">"Cinenote"</A>
                <A href="/movies" attr:class="text-muted-foreground hover:text-foreground">"Movies"</A>
                <A href="/notes" attr:class="text-muted-foreground hover:text-foreground">"Notes"</A>
            </div>
        </nav>
    }
}

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    let state = AppState::new(&config);
    let notifier = state.notifier;
    provide_context(AppContext(state));

    view! {
        <Router>
            <NavBar />
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("movies") view=MoviesPage />
                <Route path=path!("notes") view=NotesPage />
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
        <Toaster notifier=notifier />
    }
}
