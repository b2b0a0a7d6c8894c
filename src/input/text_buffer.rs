//! Text Buffer
//!
//! Cursor-addressable edit buffers for form fields. The cursor is a char
//! index so editing and cell-based rendering agree on multi-byte input.

use crossterm::event::{KeyCode, KeyModifiers};
use zeroize::Zeroizing;

/// Editing operations shared by plain and secret buffers.
pub trait TextEdit {
    fn content(&self) -> &str;
    fn cursor(&self) -> usize;
    fn insert_char(&mut self, c: char);
    fn delete_char(&mut self);
    fn delete_char_forward(&mut self);
    fn delete_word(&mut self);
    fn clear_to_start(&mut self);
    fn clear(&mut self);
    fn cursor_left(&mut self);
    fn cursor_right(&mut self);
    fn cursor_home(&mut self);
    fn cursor_end(&mut self);

    fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Content length in chars.
    fn char_len(&self) -> usize {
        self.content().chars().count()
    }
}

/// Map common editing keys onto a buffer. Returns true if the key was
/// consumed.
pub fn handle_text_key(buf: &mut dyn TextEdit, code: KeyCode, mods: KeyModifiers) -> bool {
    match (code, mods) {
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => buf.delete_word(),
        (KeyCode::Backspace, _) => buf.delete_char(),
        (KeyCode::Delete, _) => buf.delete_char_forward(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => buf.cursor_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => buf.cursor_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear_to_start(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word(),
        (KeyCode::Left, _) => buf.cursor_left(),
        (KeyCode::Right, _) => buf.cursor_right(),
        (KeyCode::Home, _) => buf.cursor_home(),
        (KeyCode::End, _) => buf.cursor_end(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => buf.insert_char(c),
        _ => return false,
    }
    true
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Char index of the start of the word before `from`: trailing whitespace
/// is skipped, then the run of non-whitespace before it.
fn word_start_before(s: &str, from: usize) -> usize {
    let chars: Vec<char> = s.chars().take(from).collect();
    let mut pos = chars.len();
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    pos
}

// Editing ops shared between the two buffer flavours, operating on the
// inner string and char cursor.
fn edit_insert(text: &mut String, cursor: &mut usize, c: char) {
    let at = byte_offset(text, *cursor);
    text.insert(at, c);
    *cursor += 1;
}

fn edit_delete_back(text: &mut String, cursor: &mut usize) {
    if *cursor == 0 {
        return;
    }
    *cursor -= 1;
    let at = byte_offset(text, *cursor);
    text.remove(at);
}

fn edit_delete_forward(text: &mut String, cursor: usize) {
    let at = byte_offset(text, cursor);
    if at < text.len() {
        text.remove(at);
    }
}

fn edit_delete_word(text: &mut String, cursor: &mut usize) {
    if *cursor == 0 {
        return;
    }
    let start = word_start_before(text, *cursor);
    let from = byte_offset(text, start);
    let to = byte_offset(text, *cursor);
    text.drain(from..to);
    *cursor = start;
}

fn edit_clear_to_start(text: &mut String, cursor: &mut usize) {
    let to = byte_offset(text, *cursor);
    text.drain(..to);
    *cursor = 0;
}

macro_rules! impl_text_edit {
    ($ty:ty) => {
        impl TextEdit for $ty {
            fn content(&self) -> &str {
                &self.text
            }

            fn cursor(&self) -> usize {
                self.cursor
            }

            fn insert_char(&mut self, c: char) {
                edit_insert(&mut self.text, &mut self.cursor, c);
            }

            fn delete_char(&mut self) {
                edit_delete_back(&mut self.text, &mut self.cursor);
            }

            fn delete_char_forward(&mut self) {
                edit_delete_forward(&mut self.text, self.cursor);
            }

            fn delete_word(&mut self) {
                edit_delete_word(&mut self.text, &mut self.cursor);
            }

            fn clear_to_start(&mut self) {
                edit_clear_to_start(&mut self.text, &mut self.cursor);
            }

            fn clear(&mut self) {
                self.text.clear();
                self.cursor = 0;
            }

            fn cursor_left(&mut self) {
                self.cursor = self.cursor.saturating_sub(1);
            }

            fn cursor_right(&mut self) {
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
            }

            fn cursor_home(&mut self) {
                self.cursor = 0;
            }

            fn cursor_end(&mut self) {
                self.cursor = self.char_len();
            }
        }
    };
}

/// Plain text field (full name, email).
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_content(content: impl Into<String>) -> Self {
        let text = content.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

impl_text_edit!(FieldBuffer);

/// Password field, zeroized on drop.
#[derive(Debug, Clone)]
pub struct SecretBuffer {
    text: Zeroizing<String>,
    cursor: usize,
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretBuffer {
    pub fn new() -> Self {
        Self {
            text: Zeroizing::new(String::new()),
            cursor: 0,
        }
    }
}

impl_text_edit!(SecretBuffer);
