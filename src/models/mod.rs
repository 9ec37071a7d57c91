use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub(crate) const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub(crate) const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// TMDB search hit. Only the fields the UI renders are kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|p| format!("{POSTER_BASE_URL}{p}"))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
            .map(|p| format!("{BACKDROP_BASE_URL}{p}"))
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct MovieResponse {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub(crate) enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload accepted by `POST /notes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct CreateNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NoteListResponse {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}
