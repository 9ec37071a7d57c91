use crate::components::ui::Modal;
use crate::models::Movie;
use leptos::prelude::*;

#[component]
pub fn MovieModal(movie: Movie, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let backdrop = movie.backdrop_url();
    let title = movie.title.clone();
    let overview = movie.overview.clone();
    let release_date = movie.release_date.clone();
    let rating = movie.rating_label();

    view! {
        <Modal on_close=on_close label="Movie details" class="sm:max-w-3xl">
            <div class="flex flex-col gap-4">
                {backdrop.clone().map(|src| view! {
                    <img
                        class="w-full rounded-lg object-cover"
                        src=src
                        alt=title.clone()
                    />
                })}
                <div class="flex flex-col gap-2">
                    <h2 class="text-xl font-semibold">{title.clone()}</h2>
                    <p class="text-sm leading-relaxed">{overview.clone()}</p>
                    <p class="text-sm">
                        <strong>"Release Date: "</strong>
                        {release_date.clone()}
                    </p>
                    <p class="text-sm">
                        <strong>"Rating: "</strong>
                        {rating.clone()}
                    </p>
                </div>
            </div>
        </Modal>
    }
}
