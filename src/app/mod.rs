//! Application State
//!
//! Ties the store, the form, and the renderer together around the event
//! loop.

mod config;
mod input;

use std::time::Instant;

use ratatui::Frame;

use crate::store::{Action, ModalId, ModalPosition, Store};
use crate::ui::components::AuthForm;
use crate::ui::{MessageType, Renderer, UiState};

pub use config::AppConfig;

/// External credential handler: the caller outside this core. Invoked with
/// (email, password) on every valid submit; may flip the auth-error and
/// navigation flags on the store.
pub type SubmitHandler = Box<dyn FnMut(&str, &str, &mut Store)>;

pub struct App {
    pub config: AppConfig,
    pub store: Store,
    pub form: AuthForm,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
    on_submit: SubmitHandler,
}

impl App {
    pub fn new(config: AppConfig, on_submit: SubmitHandler) -> Self {
        Self {
            config,
            store: Store::new(),
            form: AuthForm::login(),
            message: None,
            should_quit: false,
            on_submit,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let state = UiState {
            store: &self.store,
            form: &self.form,
            message,
        };
        Renderer::render(frame, &state);
    }

    fn check_message_expiry(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > self.config.message_timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    /// Swap to the other form variant. Fields do not survive the switch; a
    /// stale auth error does not leak into the new mode.
    pub fn switch_mode(&mut self) {
        if self.form.is_login() {
            self.form = AuthForm::signup();
            self.store.is_authorisation_page = false;
        } else {
            self.form = AuthForm::login();
            self.store.is_authorisation_page = true;
        }
        self.store.dispatch(Action::SetAuthError(false));
    }

    /// Attempt submit. Blocked while the active rule set is violated; on a
    /// valid submit the external handler fires once and the fields reset.
    pub fn submit(&mut self) {
        if !self.form.is_valid(self.store.is_terms_accepted) {
            if let Some((label, err)) = self.form.first_error(self.store.is_terms_accepted) {
                self.set_message(&format!("{}: {}", label, err), MessageType::Error);
            }
            return;
        }

        let was_login = self.form.is_login();
        (self.on_submit)(self.form.email(), self.form.password(), &mut self.store);
        self.form.reset();

        if was_login && self.store.is_auth_error {
            self.set_message("incorrect email or password", MessageType::Error);
        } else if !was_login {
            self.set_message("Account created. Log in to continue.", MessageType::Success);
        }
    }

    /// Toggle a named modal. Every open draws a fresh random position, like
    /// the terms link does.
    pub fn toggle_modal(&mut self, modal: ModalId) {
        let visible = !self.store.modal(modal).visible;
        self.store.dispatch(Action::SetModalVisible { modal, visible });
        let position = ModalPosition::random(
            &mut rand::thread_rng(),
            self.config.modal_offset_min,
            self.config.modal_offset_max,
        );
        self.store.dispatch(Action::SetModalPosition { modal, position });
    }

    pub fn close_open_modal(&mut self) {
        if let Some(modal) = self.store.open_modal() {
            self.store.dispatch(Action::SetModalVisible { modal, visible: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::input::TextEdit;

    type Calls = Rc<RefCell<Vec<(String, String)>>>;

    fn recording_app() -> (App, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let handler: SubmitHandler = Box::new(move |email, password, _store| {
            sink.borrow_mut().push((email.to_string(), password.to_string()));
        });
        (App::new(AppConfig::default(), handler), calls)
    }

    fn type_into_active(app: &mut App, text: &str) {
        let buf = app.form.active_edit().expect("active field is a text field");
        for c in text.chars() {
            buf.insert_char(c);
        }
    }

    #[test]
    fn test_invalid_submit_is_blocked_with_message() {
        let (mut app, calls) = recording_app();
        type_into_active(&mut app, "a@b.co");
        app.form.next_field();
        type_into_active(&mut app, "a");

        app.submit();

        assert!(calls.borrow().is_empty());
        let (msg, msg_type, _) = app.message.as_ref().expect("blocked submit sets a message");
        assert!(msg.contains("Minimum length is should be 2 symbols"), "{msg}");
        assert_eq!(*msg_type, MessageType::Error);
    }

    #[test]
    fn test_valid_submit_invokes_handler_once_and_clears_fields() {
        let (mut app, calls) = recording_app();
        type_into_active(&mut app, "a@b.co");
        app.form.next_field();
        type_into_active(&mut app, "ab");

        app.submit();

        assert_eq!(
            *calls.borrow(),
            vec![("a@b.co".to_string(), "ab".to_string())]
        );
        assert!(app.form.email().is_empty());
        assert!(app.form.password().is_empty());
    }

    #[test]
    fn test_failed_login_reports_auth_error() {
        let handler: SubmitHandler = Box::new(|_, _, store| {
            store.dispatch(Action::SetAuthError(true));
        });
        let mut app = App::new(AppConfig::default(), handler);
        type_into_active(&mut app, "a@b.co");
        app.form.next_field();
        type_into_active(&mut app, "nope");

        app.submit();

        assert!(app.store.is_auth_error);
        let (msg, _, _) = app.message.as_ref().expect("auth failure sets a message");
        assert_eq!(msg, "incorrect email or password");
    }

    #[test]
    fn test_switch_mode_builds_fresh_variant_and_clears_auth_error() {
        let (mut app, _) = recording_app();
        type_into_active(&mut app, "a@b.co");
        app.store.dispatch(Action::SetAuthError(true));

        app.switch_mode();
        assert!(!app.form.is_login());
        assert!(!app.store.is_authorisation_page);
        assert!(!app.store.is_auth_error);
        assert!(app.form.email().is_empty());

        app.switch_mode();
        assert!(app.form.is_login());
        assert!(app.store.is_authorisation_page);
    }

    #[test]
    fn test_toggle_modal_randomizes_position_within_bounds() {
        let (mut app, _) = recording_app();

        app.toggle_modal(ModalId::Terms);
        let modal = app.store.modal(ModalId::Terms);
        assert!(modal.visible);
        assert!((10..=30).contains(&modal.position.top));
        assert!((10..=30).contains(&modal.position.left));

        app.toggle_modal(ModalId::Terms);
        assert!(!app.store.modal(ModalId::Terms).visible);
    }

    #[test]
    fn test_close_open_modal() {
        let (mut app, _) = recording_app();
        app.toggle_modal(ModalId::Info);
        assert!(app.store.open_modal().is_some());

        app.close_open_modal();
        assert_eq!(app.store.open_modal(), None);
    }
}
