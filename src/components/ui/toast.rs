use icons::X;
use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;
use std::time::Duration;

const TOAST_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient, auto-dismissing user notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: StoredValue::new(1),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|x| x.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_TTL);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster(notifier: Notifier) -> impl IntoView {
    view! {
        <div
            data-name="Toaster"
            class="pointer-events-none fixed inset-x-0 top-4 z-[200] flex flex-col items-center gap-2"
            aria-live="polite"
        >
            <For
                each=move || notifier.toasts.get()
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let tone = match toast.kind {
                        ToastKind::Info => "border-border",
                        ToastKind::Error => "border-destructive/40 text-destructive",
                    };
                    view! {
                        <div
                            role="status"
                            class=format!("pointer-events-auto flex items-center gap-3 rounded-lg border bg-background px-4 py-2 text-sm shadow-lg {tone}")
                        >
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                class="rounded-sm p-0.5 opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <X class="size-3" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
