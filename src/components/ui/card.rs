use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}

    // Result grids: one item per movie / note.
    clx! {CardGrid, ul, "grid grid-cols-2 gap-4 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5"}
    clx! {CardItem, li, "flex flex-col overflow-hidden rounded-xl border bg-card text-card-foreground shadow-sm"}
}

#[allow(unused_imports)]
pub use components::*;
