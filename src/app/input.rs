use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::handle_text_key;
use crate::store::{Action, ModalId};
use crate::ui::components::Checkbox;
use crate::ui::View;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        if self.store.open_modal().is_some() {
            self.handle_modal_key(key);
            return;
        }

        match View::from_store(&self.store) {
            View::Home => self.handle_home_key(key),
            View::Auth => self.handle_form_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_open_modal(),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                self.should_quit = true;
            }
            (KeyCode::Char('g'), KeyModifiers::CONTROL) => self.toggle_modal(ModalId::Info),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => self.form.next_field(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.form.prev_field(),
            (KeyCode::Enter, KeyModifiers::NONE) => self.submit(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.toggle_password_visibility(),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.switch_mode(),
            (KeyCode::Char('g'), KeyModifiers::CONTROL) => self.toggle_modal(ModalId::Info),
            (KeyCode::Char('t'), KeyModifiers::CONTROL) if !self.form.is_login() => {
                self.toggle_modal(ModalId::Terms);
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) if self.form.active_checkbox().is_some() => {
                self.toggle_active_checkbox();
            }
            _ => self.dispatch_text_key(key),
        }
    }

    fn toggle_password_visibility(&mut self) {
        let Some(field) = self.form.active_password() else {
            return;
        };
        let visible = !self.store.password_visible(field);
        self.store.dispatch(Action::SetPasswordVisible { field, visible });
    }

    fn toggle_active_checkbox(&mut self) {
        match self.form.active_checkbox() {
            Some(Checkbox::Remember) => {
                let on = !self.store.is_user_remembered;
                self.store.dispatch(Action::SetUserRemembered(on));
            }
            Some(Checkbox::Terms) => {
                let on = !self.store.is_terms_accepted;
                self.store.dispatch(Action::SetTermsAccepted(on));
            }
            None => {}
        }
    }

    fn dispatch_text_key(&mut self, key: KeyEvent) {
        let editing_credentials = self.form.editing_credentials();
        let Some(buf) = self.form.active_edit() else {
            return;
        };
        let consumed = handle_text_key(buf, key.code, key.modifiers);

        // A stale auth error clears on the next credential keystroke.
        if consumed && editing_credentials && self.store.is_auth_error {
            self.store.dispatch(Action::SetAuthError(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppConfig, SubmitHandler};
    use crate::input::TextEdit;
    use crate::store::PasswordField;
    use crate::ui::components::AuthForm;

    fn app_with_noop_handler() -> App {
        let handler: SubmitHandler = Box::new(|_, _, _| {});
        App::new(AppConfig::default(), handler)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_active_field() {
        let mut app = app_with_noop_handler();
        type_text(&mut app, "a@b.co");
        assert_eq!(app.form.email(), "a@b.co");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ab");
        assert_eq!(app.form.password(), "ab");
    }

    #[test]
    fn test_visibility_toggle_preserves_value() {
        let mut app = app_with_noop_handler();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");

        press_ctrl(&mut app, 's');
        assert!(app.store.password_visible(PasswordField::Password));
        assert_eq!(app.form.password(), "secret");

        press_ctrl(&mut app, 's');
        assert!(!app.store.password_visible(PasswordField::Password));
        assert_eq!(app.form.password(), "secret");
    }

    #[test]
    fn test_visibility_toggle_ignored_on_plain_field() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 's');
        assert!(!app.store.password_visible(PasswordField::Password));
    }

    #[test]
    fn test_space_toggles_remember_flag() {
        let mut app = app_with_noop_handler();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.is_user_remembered);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.store.is_user_remembered);
    }

    #[test]
    fn test_space_toggles_terms_flag_on_signup() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 'l');
        press(&mut app, KeyCode::BackTab);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.is_terms_accepted);
    }

    #[test]
    fn test_space_in_text_field_inserts_space() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 'l');
        type_text(&mut app, "John Doe");
        match &app.form {
            AuthForm::Signup(f) => assert_eq!(f.full_name.content(), "John Doe"),
            AuthForm::Login(_) => unreachable!(),
        }
    }

    #[test]
    fn test_terms_modal_only_opens_from_signup() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 't');
        assert!(!app.store.modal(ModalId::Terms).visible);

        press_ctrl(&mut app, 'l');
        press_ctrl(&mut app, 't');
        assert!(app.store.modal(ModalId::Terms).visible);
    }

    #[test]
    fn test_modal_swallows_form_keys_until_closed() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 'g');
        assert!(app.store.modal(ModalId::Info).visible);

        type_text(&mut app, "x");
        assert_eq!(app.form.email(), "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.store.modal(ModalId::Info).visible);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_auth_error_clears_on_next_keystroke() {
        let mut app = app_with_noop_handler();
        app.store.dispatch(Action::SetAuthError(true));

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.store.is_auth_error);
    }

    #[test]
    fn test_enter_submits_valid_login() {
        let mut app = app_with_noop_handler();
        type_text(&mut app, "a@b.co");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ab");

        press(&mut app, KeyCode::Enter);
        assert!(app.form.email().is_empty());
        assert!(app.form.password().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app_with_noop_handler();
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_home_keys() {
        let mut app = app_with_noop_handler();
        app.store.is_home_page = true;
        app.store.is_user_authorised = true;

        press_ctrl(&mut app, 'g');
        assert!(app.store.modal(ModalId::Info).visible);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
