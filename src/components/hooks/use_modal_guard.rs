use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};

/// Sets `overflow: hidden` on `<body>`; the previous inline value is restored on drop.
pub struct ScrollLock {
    body: Option<web_sys::HtmlElement>,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Self {
        let body = document().body();
        let previous = body
            .as_ref()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default();

        if let Some(b) = &body {
            let _ = b.style().set_property("overflow", "hidden");
        }

        Self { body, previous }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}

/// Window keydown listener that fires on Escape; removed on drop.
pub struct EscapeListener(Option<WindowListenerHandle>);

impl EscapeListener {
    pub fn acquire(on_escape: Callback<()>) -> Self {
        let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_escape.run(());
            }
        });
        Self(Some(handle))
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

/// Everything an open modal holds on to. Dropping it releases all of it.
pub struct ModalGuard {
    _escape: EscapeListener,
    _scroll: ScrollLock,
}

impl ModalGuard {
    pub fn acquire(on_close: Callback<()>) -> Self {
        Self {
            _escape: EscapeListener::acquire(on_close),
            _scroll: ScrollLock::acquire(),
        }
    }
}

/// Acquire a [`ModalGuard`] for the lifetime of the calling component.
pub fn use_modal_guard(on_close: Callback<()>) {
    let guard = StoredValue::new_local(Some(ModalGuard::acquire(on_close)));
    on_cleanup(move || {
        let _ = guard.try_update_value(|g| g.take());
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        document()
            .body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_scroll_lock_restores_previous_overflow() {
        let body = document().body().expect("test page has a body");
        let _ = body.style().set_property("overflow", "scroll");

        {
            let _lock = ScrollLock::acquire();
            assert_eq!(body_overflow(), "hidden");
        }
        assert_eq!(body_overflow(), "scroll");

        let _ = body.style().remove_property("overflow");
    }

    #[wasm_bindgen_test]
    fn test_scroll_lock_clears_when_nothing_was_set() {
        let body = document().body().expect("test page has a body");
        let _ = body.style().remove_property("overflow");

        drop(ScrollLock::acquire());
        assert_eq!(body_overflow(), "");
    }
}
