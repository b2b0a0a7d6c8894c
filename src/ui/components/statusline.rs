//! Status Line Component
//!
//! Mode chip, transient status messages, and the key-hint bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Which interaction context the status line and hints describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiContext {
    Login,
    Signup,
    Home,
    Modal,
}

impl UiContext {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Signup => "SIGNUP",
            Self::Home => "HOME",
            Self::Modal => "MODAL",
        }
    }
}

fn context_style(context: UiContext) -> Style {
    let base = Style::default().fg(Color::Black);
    match context {
        UiContext::Login => base.bg(Color::Blue),
        UiContext::Signup => base.bg(Color::Magenta),
        UiContext::Home => base.bg(Color::Green),
        UiContext::Modal => base.bg(Color::Yellow),
    }
}

pub struct StatusLine<'a> {
    context: UiContext,
    message: Option<(&'a str, MessageType)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(context: UiContext) -> Self {
        Self { context, message: None }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let chip = format!(" {} ", self.context.indicator());
        let chip_style = context_style(self.context).add_modifier(Modifier::BOLD);
        buf.set_string(area.x, area.y, &chip, chip_style);

        if let Some((msg, msg_type)) = self.message {
            let x = area.x + chip.len() as u16 + 1;
            buf.set_string(x, area.y, msg, Style::default().bg(Color::DarkGray).fg(msg_type.color()));
        }
    }
}

pub struct HelpBar {
    hints: Vec<(&'static str, &'static str)>,
}

impl HelpBar {
    pub fn for_context(context: UiContext) -> Self {
        Self { hints: hints_for_context(context) }
    }
}

fn hints_for_context(context: UiContext) -> Vec<(&'static str, &'static str)> {
    match context {
        UiContext::Login => vec![
            ("tab", "next field"),
            ("space", "toggle"),
            ("ctrl+s", "show pwd"),
            ("enter", "log in"),
            ("ctrl+l", "sign up"),
            ("esc", "quit"),
        ],
        UiContext::Signup => vec![
            ("tab", "next field"),
            ("space", "toggle"),
            ("ctrl+s", "show pwd"),
            ("ctrl+t", "terms"),
            ("enter", "get started"),
            ("ctrl+l", "log in"),
        ],
        UiContext::Home => vec![
            ("q", "quit"),
            ("ctrl+g", "about"),
        ],
        UiContext::Modal => vec![
            ("esc", "close"),
        ],
    }
}

fn build_hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(build_hint_spans(&self.hints));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
