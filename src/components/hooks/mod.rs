pub mod use_debounce;
pub mod use_field_id;
pub mod use_modal_guard;

pub use use_debounce::use_debounce;
pub use use_field_id::{field_id, use_field_id};
pub use use_modal_guard::use_modal_guard;
