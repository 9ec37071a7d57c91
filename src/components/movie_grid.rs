use crate::components::ui::{CardGrid, CardItem};
use crate::models::Movie;
use crate::util::release_year;
use leptos::prelude::*;

#[component]
pub fn MovieGrid(
    #[prop(into)] movies: Signal<Vec<Movie>>,
    #[prop(into)] on_select: Callback<Movie>,
) -> impl IntoView {
    view! {
        <Show when=move || movies.with(|m| !m.is_empty()) fallback=|| ()>
            <CardGrid>
                <For
                    each=move || movies.get()
                    key=|m| m.id
                    children=move |movie: Movie| {
                        let poster = movie.poster_url();
                        let title = movie.title.clone();
                        let year = release_year(&movie.release_date).map(str::to_string);
                        view! {
                            <CardItem>
                                <button
                                    type="button"
                                    class="flex h-full w-full flex-col text-left hover:cursor-pointer"
                                    on:click=move |_| on_select.run(movie.clone())
                                >
                                    {match poster {
                                        Some(src) => view! {
                                            <img
                                                class="aspect-[2/3] w-full object-cover"
                                                src=src
                                                alt=title.clone()
                                                loading="lazy"
                                            />
                                        }.into_any(),
                                        None => view! {
                                            <div class="flex aspect-[2/3] w-full items-center justify-center bg-muted text-xs text-muted-foreground">
                                                "No poster"
                                            </div>
                                        }.into_any(),
                                    }}
                                    <div class="flex flex-col gap-1 px-3 py-2">
                                        <h2 class="truncate text-sm font-medium">{title}</h2>
                                        {year.map(|y| view! { <span class="text-xs text-muted-foreground">{y}</span> })}
                                    </div>
                                </button>
                            </CardItem>
                        }
                    }
                />
            </CardGrid>
        </Show>
    }
}
