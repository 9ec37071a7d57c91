#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

// Native builds only run the unit tests.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Year part of a TMDB `YYYY-MM-DD` release date, if present.
pub(crate) fn release_year(date: &str) -> Option<&str> {
    let year = date.split('-').next()?.trim();
    (year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())).then_some(year)
}
