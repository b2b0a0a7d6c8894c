//! UI Components
//!
//! Widgets composed by the renderer.

pub mod form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod statusline;

// Re-exports
pub use form::{AuthForm, Checkbox, FieldError, FormWidget};
pub use header::Header;
pub use modal::Modal;
pub use statusline::{HelpBar, MessageType, StatusLine, UiContext};
