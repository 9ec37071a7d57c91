use crate::config::EnvConfig;
use crate::models::{CreateNote, MovieResponse, Note, NoteListResponse};
use reqwest::Url;

/// TMDB refuses `page` values above this.
pub(crate) const MAX_MOVIE_PAGE: u32 = 500;
pub(crate) const DEFAULT_NOTES_PER_PAGE: u32 = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) fn clamp_movie_page(page: u32) -> u32 {
    page.clamp(1, MAX_MOVIE_PAGE)
}

fn with_auth_headers(req: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
    req.header("Authorization", format!("Bearer {}", token))
}

async fn send_json<T: serde::de::DeserializeOwned>(
    req: reqwest::RequestBuilder,
    ctx: &str,
) -> ApiResult<T> {
    let res = req.send().await.map_err(ApiError::network)?;

    if res.status().is_success() {
        res.json().await.map_err(ApiError::parse)
    } else if res.status().as_u16() == 401 {
        Err(ApiError::unauthorized())
    } else {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Err(ApiError::http(status, body, ctx))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct MovieClient {
    base_url: String,
    token: String,
}

impl MovieClient {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            base_url: config.movie_api_url.clone(),
            token: config.tmdb_token.clone(),
        }
    }

    pub(crate) fn search_url(&self, query: &str, page: u32) -> ApiResult<Url> {
        let mut url =
            Url::parse(&format!("{}/search/movie", self.base_url)).map_err(ApiError::parse)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("page", &clamp_movie_page(page).to_string())
            .append_pair("include_adult", "false")
            .append_pair("language", "en-US");
        Ok(url)
    }

    pub async fn search(&self, query: &str, page: u32) -> ApiResult<MovieResponse> {
        let url = self.search_url(query, page)?;
        let req = with_auth_headers(reqwest::Client::new().get(url), &self.token);
        send_json(req, "Movie search failed").await
    }
}

#[derive(Clone, Debug)]
pub(crate) struct NoteClient {
    base_url: String,
    token: String,
}

impl NoteClient {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            base_url: config.notes_api_url.clone(),
            token: config.notehub_token.clone(),
        }
    }

    pub(crate) fn list_url(&self, search: &str, page: u32, per_page: u32) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(ApiError::parse)?;
        {
            let mut q = url.query_pairs_mut();
            let search = search.trim();
            if !search.is_empty() {
                q.append_pair("search", search);
            }
            q.append_pair("page", &page.max(1).to_string())
                .append_pair("perPage", &per_page.to_string());
        }
        Ok(url)
    }

    pub(crate) fn note_url(&self, id: u64) -> ApiResult<Url> {
        Url::parse(&format!("{}/{}", self.base_url, id)).map_err(ApiError::parse)
    }

    pub async fn list(&self, search: &str, page: u32, per_page: u32) -> ApiResult<NoteListResponse> {
        let url = self.list_url(search, page, per_page)?;
        let req = with_auth_headers(reqwest::Client::new().get(url), &self.token);
        send_json(req, "Failed to load notes").await
    }

    pub async fn create(&self, note: &CreateNote) -> ApiResult<Note> {
        let url = Url::parse(&self.base_url).map_err(ApiError::parse)?;
        let req = with_auth_headers(reqwest::Client::new().post(url), &self.token).json(note);
        send_json(req, "Failed to create note").await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<Note> {
        let url = self.note_url(id)?;
        let req = with_auth_headers(reqwest::Client::new().delete(url), &self.token);
        send_json(req, "Failed to delete note").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EnvConfig {
        EnvConfig {
            tmdb_token: "tmdb".to_string(),
            notehub_token: "notehub".to_string(),
            movie_api_url: "https://api.themoviedb.org/3".to_string(),
            notes_api_url: "https://notehub-public.goit.study/api/notes".to_string(),
        }
    }

    #[test]
    fn test_search_url_matches_tmdb_contract() {
        let client = MovieClient::new(&config());
        let url = client.search_url("batman", 1).expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/movie?query=batman&page=1&include_adult=false&language=en-US"
        );
    }

    #[test]
    fn test_search_url_never_exceeds_max_page() {
        let client = MovieClient::new(&config());
        for page in [500, 501, 9_999, u32::MAX] {
            let url = client.search_url("x", page).expect("url should build");
            let sent = url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
                .expect("page param present");
            assert_eq!(sent, "500");
        }
    }

    #[test]
    fn test_clamp_movie_page_floors_at_one() {
        assert_eq!(clamp_movie_page(0), 1);
        assert_eq!(clamp_movie_page(42), 42);
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = MovieClient::new(&config());
        let url = client.search_url("star wars & co", 2).expect("url should build");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(query[0], ("query".to_string(), "star wars & co".to_string()));
        assert_eq!(query[1], ("page".to_string(), "2".to_string()));
    }

    #[test]
    fn test_list_url_omits_blank_search() {
        let client = NoteClient::new(&config());
        let url = client.list_url("   ", 3, DEFAULT_NOTES_PER_PAGE).expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://notehub-public.goit.study/api/notes?page=3&perPage=12"
        );
    }

    #[test]
    fn test_list_url_trims_search() {
        let client = NoteClient::new(&config());
        let url = client.list_url("  groceries ", 1, 12).expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://notehub-public.goit.study/api/notes?search=groceries&page=1&perPage=12"
        );
    }

    #[test]
    fn test_note_url_appends_id() {
        let client = NoteClient::new(&config());
        let url = client.note_url(42).expect("url should build");
        assert_eq!(url.as_str(), "https://notehub-public.goit.study/api/notes/42");
    }

    #[test]
    fn test_api_error_displays_message() {
        let e = ApiError::http(reqwest::StatusCode::NOT_FOUND, "missing".to_string(), "Failed to delete note");
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "Failed to delete note (404 Not Found): missing");
    }
}
