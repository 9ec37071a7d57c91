use leptos::prelude::*;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::time::Duration;

/// Wraps `on_settled` so it only runs once calls have stopped for `delay`.
/// Only the last value of a burst is delivered; a pending call is dropped on unmount.
pub fn use_debounce<T: Send + Sync + 'static>(
    delay: Duration,
    on_settled: Callback<T>,
) -> Callback<T> {
    let pending: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    Callback::new(move |value: T| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }

        let handle = set_timeout_with_handle(
            move || {
                let _ = pending.try_set_value(None);
                on_settled.run(value);
            },
            delay,
        )
        .ok();
        pending.set_value(handle);
    })
}
