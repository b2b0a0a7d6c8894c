//! Auth Form Component
//!
//! Dual-mode form: a login variant and a signup variant, each with its own
//! field order and validation rules. Exactly one variant exists at a time;
//! switching mode builds a fresh one.

use std::sync::OnceLock;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use regex::Regex;
use thiserror::Error;

use crate::input::{FieldBuffer, SecretBuffer, TextEdit};
use crate::store::{PasswordField, Store};

/// Minimum password length on the login form.
pub const LOGIN_PASSWORD_MIN: usize = 2;
/// Minimum password length on the signup form.
pub const SIGNUP_PASSWORD_MIN: usize = 6;
/// Maximum full name length on the signup form.
pub const FULL_NAME_MAX: usize = 10;

/// Field-level validation failure. Display strings are the user-facing
/// inline error texts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field is required!")]
    Required,
    #[error("Entered value does not match email format")]
    EmailFormat,
    #[error("Minimum length is should be {0} symbols")]
    MinLength(usize),
    #[error("Max length exceeded")]
    MaxLength,
    #[error("The password do not match")]
    PasswordMismatch,
    #[error("Terms of Service must be accepted")]
    TermsRequired,
    #[error("incorrect email or password")]
    InvalidCredentials,
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Unanchored search, same behavior as the classic /\S+@\S+\.\S+/ test.
    RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"))
}

fn check_required(value: &str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required)
}

fn check_email(value: &str) -> Option<FieldError> {
    (!email_pattern().is_match(value)).then_some(FieldError::EmailFormat)
}

fn check_min_length(value: &str, min: usize) -> Option<FieldError> {
    (value.chars().count() < min).then_some(FieldError::MinLength(min))
}

fn check_max_length(value: &str, max: usize) -> Option<FieldError> {
    (value.chars().count() > max).then_some(FieldError::MaxLength)
}

// ============================================================================
// Login variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Remember,
}

impl LoginField {
    pub const ORDER: [Self; 3] = [Self::Email, Self::Password, Self::Remember];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::Remember => "Remember me",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: FieldBuffer,
    pub password: SecretBuffer,
    active: usize,
}

impl LoginForm {
    pub fn active_field(&self) -> LoginField {
        LoginField::ORDER[self.active]
    }

    /// Local validation for one field, recomputed on every keystroke.
    pub fn field_error(&self, field: LoginField) -> Option<FieldError> {
        match field {
            LoginField::Email => {
                check_required(self.email.content()).or_else(|| check_email(self.email.content()))
            }
            LoginField::Password => check_required(self.password.content())
                .or_else(|| check_min_length(self.password.content(), LOGIN_PASSWORD_MIN)),
            LoginField::Remember => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        LoginField::ORDER.iter().all(|f| self.field_error(*f).is_none())
    }

    fn first_error(&self) -> Option<(&'static str, FieldError)> {
        LoginField::ORDER
            .iter()
            .find_map(|f| self.field_error(*f).map(|e| (f.label(), e)))
    }
}

// ============================================================================
// Signup variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl SignupField {
    pub const ORDER: [Self; 5] = [
        Self::FullName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Terms => "Terms of Service",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: FieldBuffer,
    pub email: FieldBuffer,
    pub password: SecretBuffer,
    pub confirm_password: SecretBuffer,
    active: usize,
}

impl SignupForm {
    pub fn active_field(&self) -> SignupField {
        SignupField::ORDER[self.active]
    }

    pub fn field_error(&self, field: SignupField) -> Option<FieldError> {
        match field {
            SignupField::FullName => check_required(self.full_name.content())
                .or_else(|| check_max_length(self.full_name.content(), FULL_NAME_MAX)),
            SignupField::Email => {
                check_required(self.email.content()).or_else(|| check_email(self.email.content()))
            }
            SignupField::Password => check_required(self.password.content())
                .or_else(|| check_min_length(self.password.content(), SIGNUP_PASSWORD_MIN)),
            SignupField::ConfirmPassword => check_required(self.confirm_password.content())
                .or_else(|| check_min_length(self.confirm_password.content(), SIGNUP_PASSWORD_MIN))
                .or_else(|| {
                    // Must equal the password value at validation time.
                    (self.confirm_password.content() != self.password.content())
                        .then_some(FieldError::PasswordMismatch)
                }),
            SignupField::Terms => None,
        }
    }

    pub fn is_valid(&self, terms_accepted: bool) -> bool {
        terms_accepted && SignupField::ORDER.iter().all(|f| self.field_error(*f).is_none())
    }

    fn first_error(&self, terms_accepted: bool) -> Option<(&'static str, FieldError)> {
        let field_err = SignupField::ORDER
            .iter()
            .find_map(|f| self.field_error(*f).map(|e| (f.label(), e)));
        field_err.or_else(|| {
            (!terms_accepted).then_some((SignupField::Terms.label(), FieldError::TermsRequired))
        })
    }
}

// ============================================================================
// Tagged form
// ============================================================================

/// Checkbox reachable from the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    Remember,
    Terms,
}

#[derive(Debug, Clone)]
pub enum AuthForm {
    Login(LoginForm),
    Signup(SignupForm),
}

impl AuthForm {
    pub fn login() -> Self {
        Self::Login(LoginForm::default())
    }

    pub fn signup() -> Self {
        Self::Signup(SignupForm::default())
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Self::Login(_))
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login(_) => "Log in",
            Self::Signup(_) => "Get Started",
        }
    }

    pub fn next_field(&mut self) {
        match self {
            Self::Login(f) => f.active = (f.active + 1) % LoginField::ORDER.len(),
            Self::Signup(f) => f.active = (f.active + 1) % SignupField::ORDER.len(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            Self::Login(f) => {
                f.active = f.active.checked_sub(1).unwrap_or(LoginField::ORDER.len() - 1);
            }
            Self::Signup(f) => {
                f.active = f.active.checked_sub(1).unwrap_or(SignupField::ORDER.len() - 1);
            }
        }
    }

    /// Edit buffer of the focused field, if it is a text field.
    pub fn active_edit(&mut self) -> Option<&mut dyn TextEdit> {
        match self {
            Self::Login(f) => match f.active_field() {
                LoginField::Email => Some(&mut f.email),
                LoginField::Password => Some(&mut f.password),
                LoginField::Remember => None,
            },
            Self::Signup(f) => match f.active_field() {
                SignupField::FullName => Some(&mut f.full_name),
                SignupField::Email => Some(&mut f.email),
                SignupField::Password => Some(&mut f.password),
                SignupField::ConfirmPassword => Some(&mut f.confirm_password),
                SignupField::Terms => None,
            },
        }
    }

    /// Visibility slot of the focused field, if it is a password field.
    pub fn active_password(&self) -> Option<PasswordField> {
        match self {
            Self::Login(f) => {
                (f.active_field() == LoginField::Password).then_some(PasswordField::Password)
            }
            Self::Signup(f) => match f.active_field() {
                SignupField::Password => Some(PasswordField::Password),
                SignupField::ConfirmPassword => Some(PasswordField::ConfirmPassword),
                _ => None,
            },
        }
    }

    pub fn active_checkbox(&self) -> Option<Checkbox> {
        match self {
            Self::Login(f) => {
                (f.active_field() == LoginField::Remember).then_some(Checkbox::Remember)
            }
            Self::Signup(f) => (f.active_field() == SignupField::Terms).then_some(Checkbox::Terms),
        }
    }

    /// True while the focused field is login email or password; edits there
    /// clear a stale auth error.
    pub fn editing_credentials(&self) -> bool {
        match self {
            Self::Login(f) => matches!(f.active_field(), LoginField::Email | LoginField::Password),
            Self::Signup(_) => false,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Login(f) => f.email.content(),
            Self::Signup(f) => f.email.content(),
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Self::Login(f) => f.password.content(),
            Self::Signup(f) => f.password.content(),
        }
    }

    pub fn is_valid(&self, terms_accepted: bool) -> bool {
        match self {
            Self::Login(f) => f.is_valid(),
            Self::Signup(f) => f.is_valid(terms_accepted),
        }
    }

    /// First violated rule in field order, for the status line on a blocked
    /// submit.
    pub fn first_error(&self, terms_accepted: bool) -> Option<(&'static str, FieldError)> {
        match self {
            Self::Login(f) => f.first_error(),
            Self::Signup(f) => f.first_error(terms_accepted),
        }
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        match self {
            Self::Login(f) => {
                f.email.clear();
                f.password.clear();
            }
            Self::Signup(f) => {
                f.full_name.clear();
                f.email.clear();
                f.password.clear();
                f.confirm_password.clear();
            }
        }
    }
}

// ============================================================================
// Widget
// ============================================================================

pub struct FormWidget<'a> {
    form: &'a AuthForm,
    store: &'a Store,
}

impl<'a> FormWidget<'a> {
    pub fn new(form: &'a AuthForm, store: &'a Store) -> Self {
        Self { form, store }
    }

    fn block_title(&self) -> &'static str {
        if self.form.is_login() {
            " Log in "
        } else {
            " Sign up "
        }
    }

    // label + input + error per text field, one row per checkbox, a blank
    // row, the button row, and the block borders.
    fn desired_height(&self) -> u16 {
        match self.form {
            AuthForm::Login(_) => 2 * 3 + 1 + 1 + 1 + 2,
            AuthForm::Signup(_) => 4 * 3 + 1 + 1 + 1 + 2,
        }
    }
}

const FORM_WIDTH: u16 = 56;

fn form_rect(area: Rect, height: u16) -> Rect {
    let width = FORM_WIDTH.min(area.width.saturating_sub(2));
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn fill_row(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    for cell_x in x..x + width {
        if let Some(cell) = buf.cell_mut((cell_x, y)) {
            cell.set_style(style);
        }
    }
}

fn render_cell_cursor(buf: &mut Buffer, x: u16, y: u16, max_x: u16) {
    if x >= max_x {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}

/// Window the value so the cursor stays on screen; returns the visible text
/// and the cursor column within it.
fn visible_slice(value: &str, cursor: usize, width: usize) -> (String, usize) {
    let scroll = if cursor >= width.saturating_sub(1) {
        cursor.saturating_sub(width.saturating_sub(2))
    } else {
        0
    };
    let visible: String = value.chars().skip(scroll).take(width).collect();
    (visible, cursor.saturating_sub(scroll))
}

struct TextFieldRow<'a> {
    label: &'a str,
    required_mark: bool,
    value: &'a str,
    cursor: usize,
    masked: bool,
    is_active: bool,
    error: Option<FieldError>,
}

/// Renders label, input, and error rows. Returns rows used.
fn render_text_field(buf: &mut Buffer, inner: Rect, y: u16, row: TextFieldRow<'_>) -> u16 {
    let label = if row.required_mark {
        format!("{}*", row.label)
    } else {
        row.label.to_string()
    };
    buf.set_string(inner.x, y, &label, label_style(row.is_active));

    let input_y = y + 1;
    let input_bg = if row.is_active { Color::DarkGray } else { Color::Black };
    fill_row(buf, inner.x, input_y, inner.width, Style::default().bg(input_bg));

    let display = if row.masked {
        "•".repeat(row.value.chars().count())
    } else {
        row.value.to_string()
    };
    let cursor = if row.is_active { row.cursor } else { 0 };
    let (visible, cursor_col) = visible_slice(&display, cursor, inner.width as usize);
    let fg = if row.masked { Color::Green } else { Color::White };
    buf.set_string(inner.x, input_y, &visible, Style::default().fg(fg).bg(input_bg));

    if row.is_active {
        render_cell_cursor(buf, inner.x + cursor_col as u16, input_y, inner.x + inner.width);
    }

    if let Some(err) = row.error {
        buf.set_string(inner.x, y + 2, err.to_string(), Style::default().fg(Color::Red));
    }

    3
}

fn render_checkbox(buf: &mut Buffer, x: u16, y: u16, checked: bool, label: &str, is_active: bool) {
    let box_mark = if checked { "[x]" } else { "[ ]" };
    let style = label_style(is_active);
    buf.set_string(x, y, box_mark, style);
    buf.set_string(x + 4, y, label, style);
}

fn render_submit_button(buf: &mut Buffer, inner: Rect, y: u16, label: &str, enabled: bool) {
    let text = format!("[ {} ]", label);
    let style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let x = inner.x + (inner.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, y, &text, style);
}

fn render_login(buf: &mut Buffer, inner: Rect, form: &LoginForm, store: &Store) -> u16 {
    let mut y = inner.y;
    let active = form.active_field();

    // Stale auth error fills in where no local error is active.
    let fallback = |field: LoginField| {
        form.field_error(field).or_else(|| {
            store.is_auth_error.then_some(FieldError::InvalidCredentials)
        })
    };

    y += render_text_field(buf, inner, y, TextFieldRow {
        label: LoginField::Email.label(),
        required_mark: false,
        value: form.email.content(),
        cursor: form.email.cursor(),
        masked: false,
        is_active: active == LoginField::Email,
        error: fallback(LoginField::Email),
    });

    y += render_text_field(buf, inner, y, TextFieldRow {
        label: LoginField::Password.label(),
        required_mark: false,
        value: form.password.content(),
        cursor: form.password.cursor(),
        masked: !store.is_password_visible,
        is_active: active == LoginField::Password,
        error: fallback(LoginField::Password),
    });

    render_checkbox(
        buf,
        inner.x,
        y,
        store.is_user_remembered,
        LoginField::Remember.label(),
        active == LoginField::Remember,
    );
    let restore = "Forgot Password?";
    let restore_x = inner.x + inner.width.saturating_sub(restore.len() as u16);
    buf.set_string(restore_x, y, restore, Style::default().fg(Color::DarkGray));

    y + 2
}

fn render_signup(buf: &mut Buffer, inner: Rect, form: &SignupForm, store: &Store) -> u16 {
    let mut y = inner.y;
    let active = form.active_field();

    let text_fields = [
        SignupField::FullName,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    for field in text_fields {
        let (value, cursor) = match field {
            SignupField::FullName => (form.full_name.content(), form.full_name.cursor()),
            SignupField::Email => (form.email.content(), form.email.cursor()),
            SignupField::Password => (form.password.content(), form.password.cursor()),
            SignupField::ConfirmPassword => {
                (form.confirm_password.content(), form.confirm_password.cursor())
            }
            SignupField::Terms => continue,
        };
        let masked = match field {
            SignupField::Password => !store.is_password_visible,
            SignupField::ConfirmPassword => !store.is_confirm_password_visible,
            _ => false,
        };
        y += render_text_field(buf, inner, y, TextFieldRow {
            label: field.label(),
            required_mark: true,
            value,
            cursor,
            masked,
            is_active: active == field,
            error: form.field_error(field),
        });
    }

    render_checkbox(
        buf,
        inner.x,
        y,
        store.is_terms_accepted,
        "I agree to the Terms of Service [Ctrl+T]",
        active == SignupField::Terms,
    );

    y + 2
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_area = form_rect(area, self.desired_height());
        // Too small to lay the fields out; skip rather than clip rows.
        if form_area.height < self.desired_height() || form_area.width < 20 {
            return;
        }
        Clear.render(form_area, buf);

        let block = Block::default()
            .title(self.block_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        let button_y = match &self.form {
            AuthForm::Login(f) => render_login(buf, inner, f, self.store),
            AuthForm::Signup(f) => render_signup(buf, inner, f, self.store),
        };

        let enabled = self.form.is_valid(self.store.is_terms_accepted);
        if button_y < inner.y + inner.height {
            render_submit_button(buf, inner, button_y, self.form.submit_label(), enabled);
        }
    }
}
