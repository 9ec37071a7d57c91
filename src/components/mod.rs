pub mod hooks;
pub mod ui;

mod feedback;
mod movie_grid;
mod movie_modal;
mod note_form;
mod note_list;
mod note_modal;
mod pagination;
mod search_bar;
mod search_box;

pub(crate) use feedback::{ErrorMessage, Loader};
pub(crate) use movie_grid::MovieGrid;
pub(crate) use movie_modal::MovieModal;
pub(crate) use note_form::NoteForm;
pub(crate) use note_list::NoteList;
pub(crate) use note_modal::NoteModal;
pub(crate) use pagination::Pagination;
pub(crate) use search_bar::SearchBar;
pub(crate) use search_box::SearchBox;
