use crate::pagination::{
    page_window, to_page_number, to_selected_index, PageItem, MARGIN_PAGES_DISPLAYED,
    PAGE_RANGE_DISPLAYED,
};
use leptos::prelude::*;

const LINK_CLASSES: &str = "inline-flex h-8 min-w-8 items-center justify-center rounded-md border px-2 text-sm transition-colors hover:bg-accent disabled:pointer-events-none disabled:opacity-40";

/// Page links for a one-based `current_page`. Reports one-based page numbers.
/// Renders nothing when there is at most one page.
#[component]
pub fn Pagination(
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    let selected = move || {
        to_selected_index(current_page.get()).min(total_pages.get().saturating_sub(1))
    };

    let selected_untracked = move || {
        to_selected_index(current_page.get_untracked())
            .min(total_pages.get_untracked().saturating_sub(1))
    };

    let go = move |index: u32| {
        let page = to_page_number(index);
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || (total_pages.get() > 1) fallback=|| ()>
            <nav aria-label="Pagination" class="flex justify-center py-6">
                <ul class="flex flex-wrap items-center gap-1">
                    <li>
                        <button
                            type="button"
                            class=LINK_CLASSES
                            aria-label="Previous page"
                            disabled=move || selected() == 0
                            on:click=move |_| go(selected_untracked().saturating_sub(1))
                        >
                            "←"
                        </button>
                    </li>
                    {move || {
                        let current = selected();
                        page_window(
                            total_pages.get(),
                            current,
                            PAGE_RANGE_DISPLAYED,
                            MARGIN_PAGES_DISPLAYED,
                        )
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(index) => {
                                let active = index == current;
                                let class = if active {
                                    format!("{LINK_CLASSES} bg-primary text-primary-foreground hover:bg-primary/90")
                                } else {
                                    LINK_CLASSES.to_string()
                                };
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class=class
                                            aria-current=active.then_some("page")
                                            on:click=move |_| go(index)
                                        >
                                            {to_page_number(index)}
                                        </button>
                                    </li>
                                }
                                .into_any()
                            }
                            PageItem::Break(jump) => view! {
                                <li>
                                    <button
                                        type="button"
                                        class=LINK_CLASSES
                                        aria-label=format!("Jump to page {}", to_page_number(jump))
                                        on:click=move |_| go(jump)
                                    >
                                        "…"
                                    </button>
                                </li>
                            }
                            .into_any(),
                        })
                        .collect_view()
                    }}
                    <li>
                        <button
                            type="button"
                            class=LINK_CLASSES
                            aria-label="Next page"
                            disabled=move || selected() + 1 >= total_pages.get()
                            on:click=move |_| {
                                go((selected_untracked() + 1).min(total_pages.get_untracked().saturating_sub(1)))
                            }
                        >
                            "→"
                        </button>
                    </li>
                </ul>
            </nav>
        </Show>
    }
}
