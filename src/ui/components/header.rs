//! Header Component
//!
//! Pure display: title and subtitle selected from the page flags, plus the
//! mode-switch call to action. No internal state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::store::Store;

pub struct Header<'a> {
    store: &'a Store,
}

impl<'a> Header<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Login text wins, then the authorised home page, then signup.
    pub fn title(&self) -> &'static str {
        if self.store.is_authorisation_page {
            "Log in to your Account"
        } else if self.store.is_home_page && self.store.is_user_authorised {
            "Welcome to your profile page!"
        } else {
            "Create an Account"
        }
    }

    /// Suppressed on the authorised home page.
    pub fn subtitle(&self) -> Option<&'static str> {
        if self.store.is_home_page && self.store.is_user_authorised {
            return None;
        }
        if self.store.is_authorisation_page {
            Some("Welcome back, please enter your details.")
        } else {
            Some("Sign up now to get started with an account.")
        }
    }

    /// The mode-switch call to action, suppressed on the home page.
    pub fn call_to_action(&self) -> Option<&'static str> {
        if self.store.is_home_page {
            return None;
        }
        if self.store.is_authorisation_page {
            Some("Sign up [Ctrl+L]")
        } else {
            Some("Log in [Ctrl+L]")
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_string(
            area.x,
            area.y,
            self.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        );

        if let Some(subtitle) = self.subtitle() {
            if area.height > 1 {
                buf.set_string(area.x, area.y + 1, subtitle, Style::default().fg(Color::Gray));
            }
        }

        if let Some(cta) = self.call_to_action() {
            let x = area.x + area.width.saturating_sub(cta.chars().count() as u16);
            buf.set_string(x, area.y, cta, Style::default().fg(Color::Magenta));
        }
    }
}
