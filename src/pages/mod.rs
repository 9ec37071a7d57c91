mod movies;
mod notes;

pub(crate) use movies::MoviesPage;
pub(crate) use notes::NotesPage;

use crate::components::ui::{Card, CardDescription, CardHeader, CardTitle};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-[1080px] px-4 py-12">
            <div class="mb-6 space-y-1">
                <h1 class="text-xl font-semibold">"Cinenote"</h1>
                <p class="text-xs text-muted-foreground">"Find a movie. Write it down."</p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                <a href="/movies" class="block transition-colors hover:opacity-90">
                    <Card>
                        <CardHeader>
                            <CardTitle>"Movies"</CardTitle>
                            <CardDescription>"Search TMDB and browse the results."</CardDescription>
                        </CardHeader>
                    </Card>
                </a>
                <a href="/notes" class="block transition-colors hover:opacity-90">
                    <Card>
                        <CardHeader>
                            <CardTitle>"Notes"</CardTitle>
                            <CardDescription>"Create, search and delete tagged notes."</CardDescription>
                        </CardHeader>
                    </Card>
                </a>
            </div>
        </div>
    }
}
