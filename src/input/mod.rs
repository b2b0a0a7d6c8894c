//! Text Input
//!
//! Edit buffers behind every form field.

mod text_buffer;

pub use text_buffer::{handle_text_key, FieldBuffer, SecretBuffer, TextEdit};
