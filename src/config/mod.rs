use leptos::logging::warn;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_MOVIE_API_URL: &str = "https://api.themoviedb.org/3";
pub(crate) const DEFAULT_NOTES_API_URL: &str = "https://notehub-public.goit.study/api/notes";

/// Process-wide settings, read once at startup and handed to the API clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub tmdb_token: String,
    pub notehub_token: String,
    pub movie_api_url: String,
    pub notes_api_url: String,
}

impl EnvConfig {
    /// Build from key lookups in priority order. Within each source the upper-case
    /// name is tried before its lower-case alias, and a source is exhausted before
    /// the next one is consulted. URLs fall back to the public endpoints.
    pub(crate) fn from_sources(sources: &[&dyn Fn(&str) -> Option<String>]) -> Self {
        let non_blank = |source: &dyn Fn(&str) -> Option<String>, key: &str| {
            source(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let get = |upper: &str, lower: &str| {
            sources
                .iter()
                .find_map(|source| non_blank(*source, upper).or_else(|| non_blank(*source, lower)))
        };

        let tmdb_token = get("TMDB_TOKEN", "tmdb_token").unwrap_or_default();
        let notehub_token = get("NOTEHUB_TOKEN", "notehub_token").unwrap_or_default();

        if tmdb_token.is_empty() {
            warn!("TMDB_TOKEN is not set; movie search requests will be rejected");
        }
        if notehub_token.is_empty() {
            warn!("NOTEHUB_TOKEN is not set; notes requests will be rejected");
        }

        Self {
            tmdb_token,
            notehub_token,
            movie_api_url: get("MOVIE_API_URL", "movie_api_url")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_MOVIE_API_URL.to_string()),
            notes_api_url: get("NOTES_API_URL", "notes_api_url")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_NOTES_API_URL.to_string()),
        }
    }

    /// Values baked in at build time (`TMDB_TOKEN=... trunk build`).
    fn compile_time(key: &str) -> Option<String> {
        let v = match key {
            "TMDB_TOKEN" => option_env!("TMDB_TOKEN"),
            "NOTEHUB_TOKEN" => option_env!("NOTEHUB_TOKEN"),
            "MOVIE_API_URL" => option_env!("MOVIE_API_URL"),
            "NOTES_API_URL" => option_env!("NOTES_API_URL"),
            _ => None,
        };
        v.map(str::to_string)
    }

    /// Reads `window.ENV` (runtime injection by the hosting page), then build-time env.
    pub fn load() -> Self {
        let runtime_env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let runtime = |key: &str| {
            runtime_env
                .as_ref()
                .and_then(|env| js_sys::Reflect::get(env, &key.into()).ok())
                .and_then(|v| v.as_string())
        };
        let sources: [&dyn Fn(&str) -> Option<String>; 2] = [&runtime, &Self::compile_time];
        Self::from_sources(&sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let nothing = |_: &str| None::<String>;
        let cfg = EnvConfig::from_sources(&[&nothing]);
        assert!(cfg.tmdb_token.is_empty());
        assert!(cfg.notehub_token.is_empty());
        assert_eq!(cfg.movie_api_url, DEFAULT_MOVIE_API_URL);
        assert_eq!(cfg.notes_api_url, DEFAULT_NOTES_API_URL);
    }

    #[test]
    fn test_upper_case_keys_win_over_aliases() {
        let cfg = EnvConfig::from_sources(&[&lookup_from(&[
            ("TMDB_TOKEN", "upper"),
            ("tmdb_token", "lower"),
            ("notehub_token", "alias-only"),
        ])]);
        assert_eq!(cfg.tmdb_token, "upper");
        assert_eq!(cfg.notehub_token, "alias-only");
    }

    #[test]
    fn test_runtime_alias_beats_build_time_value() {
        let runtime = lookup_from(&[("tmdb_token", "runtime-alias")]);
        let build = lookup_from(&[("TMDB_TOKEN", "baked-in"), ("NOTEHUB_TOKEN", "baked-notehub")]);
        let cfg = EnvConfig::from_sources(&[&runtime, &build]);
        assert_eq!(cfg.tmdb_token, "runtime-alias");
        assert_eq!(cfg.notehub_token, "baked-notehub");
    }

    #[test]
    fn test_blank_values_are_ignored_and_urls_trimmed() {
        let cfg = EnvConfig::from_sources(&[&lookup_from(&[
            ("TMDB_TOKEN", "   "),
            ("NOTEHUB_TOKEN", ""),
            ("notehub_token", "from-alias"),
            ("NOTES_API_URL", "http://localhost:3000/api/notes/"),
        ])]);
        assert!(cfg.tmdb_token.is_empty());
        assert_eq!(cfg.notehub_token, "from-alias");
        assert_eq!(cfg.notes_api_url, "http://localhost:3000/api/notes");
    }
}
