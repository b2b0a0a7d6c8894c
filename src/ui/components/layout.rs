//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn render_footer(buf: &mut Buffer, popup: Rect, text: &str) {
    if popup.height == 0 {
        return;
    }
    let y = popup.y + popup.height - 1;
    let x = popup.x + (popup.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, y, text, Style::default().fg(Color::DarkGray));
}

/// Split the frame into header, content, status line, and help bar rows.
pub fn page_rows(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = 3u16.min(area.height);
    let chrome = 2u16.min(area.height.saturating_sub(header_height));
    let content_height = area.height.saturating_sub(header_height + chrome);

    let header = Rect::new(area.x, area.y, area.width, header_height);
    let content = Rect::new(area.x, area.y + header_height, area.width, content_height);
    let status_y = area.y + header_height + content_height;
    let status = Rect::new(area.x, status_y, area.width, 1.min(chrome));
    let help = Rect::new(area.x, status_y + 1, area.width, chrome.saturating_sub(1));
    (header, content, status, help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_rows_cover_frame() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, content, status, help) = page_rows(area);
        assert_eq!(header.height + content.height + status.height + help.height, 24);
        assert_eq!(help.bottom(), area.bottom());
        assert_eq!(status.y, content.bottom());
    }

    #[test]
    fn test_page_rows_tiny_frame() {
        let area = Rect::new(0, 0, 20, 2);
        let (header, content, status, help) = page_rows(area);
        assert!(header.height + content.height + status.height + help.height <= 2);
    }
}
