use icons::X;
use leptos::portal::Portal;
use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::components::hooks::use_modal_guard;

/// Overlay rendered into `<body>`. Closes on Escape, on the close button and on
/// clicks that land on the backdrop itself. Page scroll is locked while mounted.
#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    #[prop(default = "Dialog")] label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    use_modal_guard(on_close);

    let panel_class = tw_merge!(
        "relative w-full max-w-[calc(100%-2rem)] sm:max-w-xl max-h-[90vh] overflow-y-auto rounded-2xl border bg-background p-6 shadow-lg",
        class
    );

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <Portal>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-[100] flex items-center justify-center bg-black/50"
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=on_backdrop_click
            >
                <div data-name="ModalContent" class=panel_class.clone()>
                    <button
                        type="button"
                        class="absolute top-4 right-4 rounded-sm p-1 focus:ring-2 focus:ring-ring focus:ring-offset-2 focus:outline-none"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        <X />
                    </button>
                    {children()}
                </div>
            </div>
        </Portal>
    }
}
