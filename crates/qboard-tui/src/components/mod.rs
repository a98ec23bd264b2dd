pub mod error_panel;
pub mod list_frame;
pub mod spinner;

pub use error_panel::render_error_panel;
pub use list_frame::{ListFrame, ListRow};
pub use spinner::Spinner;
