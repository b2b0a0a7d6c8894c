//! Modal Component
//!
//! Generic overlay parameterized by name, optional title, visibility flag,
//! and arbitrary text content. The owning code controls open/close and
//! position through store actions; the widget only draws.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::store::{ModalId, ModalState};

use super::layout::{create_popup_block, render_footer};

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 12;

pub struct Modal<'a> {
    id: ModalId,
    title: Option<&'a str>,
    content: &'a str,
    state: &'a ModalState,
}

impl<'a> Modal<'a> {
    pub fn new(id: ModalId, state: &'a ModalState, content: &'a str) -> Self {
        Self { id, title: None, content, state }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Popup anchored at the stored offset, clamped so it stays on screen.
    fn popup_area(&self, area: Rect) -> Rect {
        let width = MODAL_WIDTH.min(area.width);
        let height = MODAL_HEIGHT.min(area.height);
        let x = (area.x + self.state.position.left).min(area.right().saturating_sub(width));
        let y = (area.y + self.state.position.top).min(area.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let block = create_popup_block(self.title.unwrap_or(self.id.name()), Color::Magenta);
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(self.content)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        render_footer(buf, popup, " Esc close ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ModalPosition;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_hidden_modal_renders_nothing() {
        let state = ModalState::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Modal::new(ModalId::Terms, &state, "some terms").render(area, &mut buf);
        assert!(!buffer_text(&buf).contains("some terms"));
    }

    #[test]
    fn test_visible_modal_renders_title_and_content() {
        let state = ModalState {
            visible: true,
            position: ModalPosition { top: 10, left: 10 },
        };
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        Modal::new(ModalId::Terms, &state, "agree to these terms")
            .title(" Terms of Service ")
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Terms of Service"), "{text}");
        assert!(text.contains("agree to these"), "{text}");
    }

    #[test]
    fn test_untitled_modal_falls_back_to_name() {
        let state = ModalState {
            visible: true,
            position: ModalPosition::default(),
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Modal::new(ModalId::Info, &state, "hello").render(area, &mut buf);
        assert!(buffer_text(&buf).contains("info-modal"));
    }

    #[test]
    fn test_popup_is_clamped_inside_area() {
        let state = ModalState {
            visible: true,
            position: ModalPosition { top: 30, left: 30 },
        };
        let area = Rect::new(0, 0, 50, 20);
        let modal = Modal::new(ModalId::Terms, &state, "x");
        let popup = modal.popup_area(area);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
    }
}
