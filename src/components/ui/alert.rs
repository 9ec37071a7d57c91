use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
    clx! {FieldError, div, "text-xs text-destructive"}
}

#[allow(unused_imports)]
pub use components::*;
