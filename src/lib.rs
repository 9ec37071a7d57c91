mod api;
mod app;
mod components;
mod config;
mod models;
mod pages;
mod pagination;
mod query;
mod state;
mod util;
mod validation;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = EnvConfig::load();
    mount_to_body(move || view! { <App config=config /> });
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_env_config_reads_window_env() {
        let win = web_sys::window().expect("browser window");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"TMDB_TOKEN".into(), &"tmdb-from-window".into())
            .expect("set TMDB_TOKEN");
        js_sys::Reflect::set(&win, &"ENV".into(), &env).expect("set window.ENV");

        let cfg = EnvConfig::load();
        assert_eq!(cfg.tmdb_token, "tmdb-from-window");

        js_sys::Reflect::set(&win, &"ENV".into(), &JsValue::UNDEFINED).expect("unset window.ENV");
    }
}
