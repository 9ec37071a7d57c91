use crate::components::ui::Modal;
use crate::components::NoteForm;
use leptos::prelude::*;

#[component]
pub fn NoteModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close=on_close label="Create note">
            <NoteForm on_close=on_close />
        </Modal>
    }
}
