pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod modal;
pub mod spinner;
pub mod textarea;
pub mod toast;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
#[allow(unused_imports)]
pub use card::*;
pub use input::*;
pub use label::*;
pub use modal::*;
pub use spinner::*;
pub use textarea::*;
pub use toast::*;
