use crate::components::ui::{Alert, AlertDescription, Spinner};
use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-8 text-sm text-muted-foreground">
            <Spinner />
            <span>{label}</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(optional_no_strip)] detail: Option<String>) -> impl IntoView {
    view! {
        <Alert class="border-destructive/30">
            <AlertDescription class="text-destructive">
                "There was an error, please try again..."
            </AlertDescription>
            {detail.map(|d| view! { <p class="mt-1 text-xs text-muted-foreground">{d}</p> })}
        </Alert>
    }
}
