//! Frame composition
//!
//! Lays out header, page content, status line, and help bar, then draws any
//! visible modals on top.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::store::{ModalId, Store};

use super::components::{
    layout::page_rows, AuthForm, FormWidget, Header, HelpBar, MessageType, Modal, StatusLine,
    UiContext,
};

/// Copy shown in the terms-of-service modal, opened from the signup form.
const TERMS_TEXT: &str = "These are demo terms. The service stores nothing, \
sends nothing, and promises nothing. Accounts exist only for the lifetime of \
this process. By continuing you accept that the only thing being exercised \
here is the form in front of you.";

/// Copy shown in the informational modal owned by the header.
const INFO_TEXT: &str = "Demo account flow. Use the form to log in or sign up; \
credentials are checked by whatever handler the host application supplied. \
Nothing leaves your terminal.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    Home,
}

impl View {
    pub fn from_store(store: &Store) -> Self {
        if store.is_home_page && store.is_user_authorised {
            Self::Home
        } else {
            Self::Auth
        }
    }
}

pub struct UiState<'a> {
    pub store: &'a Store,
    pub form: &'a AuthForm,
    pub message: Option<(&'a str, MessageType)>,
}

impl UiState<'_> {
    pub fn context(&self) -> UiContext {
        if self.store.open_modal().is_some() {
            return UiContext::Modal;
        }
        match View::from_store(self.store) {
            View::Home => UiContext::Home,
            View::Auth if self.form.is_login() => UiContext::Login,
            View::Auth => UiContext::Signup,
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let (header_area, content, status, help) = page_rows(frame.area());
        let context = state.context();

        frame.render_widget(Header::new(state.store), header_area);

        match View::from_store(state.store) {
            View::Auth => frame.render_widget(FormWidget::new(state.form, state.store), content),
            View::Home => render_home(frame, content),
        }

        let mut status_line = StatusLine::new(context);
        if let Some((msg, msg_type)) = state.message {
            status_line = status_line.message(msg, msg_type);
        }
        frame.render_widget(status_line, status);
        frame.render_widget(HelpBar::for_context(context), help);

        render_modals(frame, state.store, content);
    }
}

fn render_home(frame: &mut Frame, content: Rect) {
    if content.height == 0 {
        return;
    }
    let text = Paragraph::new("You are signed in. Press q to quit.")
        .style(Style::default().fg(Color::Gray));
    let row = Rect::new(content.x, content.y + content.height / 2, content.width, 1);
    frame.render_widget(text, row);
}

/// Modals are positioned relative to the content origin.
fn render_modals(frame: &mut Frame, store: &Store, content: Rect) {
    frame.render_widget(
        Modal::new(ModalId::Terms, store.modal(ModalId::Terms), TERMS_TEXT)
            .title(" Terms of Service "),
        content,
    );
    frame.render_widget(
        Modal::new(ModalId::Info, store.modal(ModalId::Info), INFO_TEXT).title(" About "),
        content,
    );
}
