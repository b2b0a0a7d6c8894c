//! Shared UI State
//!
//! Single source of truth for page flags, form flags, and modal state.
//! All in-scope mutation goes through [`Store::dispatch`] with a named
//! [`Action`]; external collaborators (the submit handler, navigation)
//! write the page/auth flags directly.

pub mod modal;

pub use modal::{ModalId, ModalPosition, ModalState};

/// Password fields with an independent visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Password,
    ConfirmPassword,
}

/// Named state updates. Last dispatched action wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetUserRemembered(bool),
    SetTermsAccepted(bool),
    SetPasswordVisible { field: PasswordField, visible: bool },
    SetAuthError(bool),
    SetModalVisible { modal: ModalId, visible: bool },
    SetModalPosition { modal: ModalId, position: ModalPosition },
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    // Page flags, mutated by navigation and the external auth handler.
    pub is_authorisation_page: bool,
    pub is_home_page: bool,
    pub is_user_authorised: bool,

    // Form flags.
    pub is_user_remembered: bool,
    pub is_terms_accepted: bool,
    pub is_auth_error: bool,
    pub is_password_visible: bool,
    pub is_confirm_password_visible: bool,

    terms_modal: ModalState,
    info_modal: ModalState,
}

impl Store {
    /// Fresh store starting on the login page.
    pub fn new() -> Self {
        Self {
            is_authorisation_page: true,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetUserRemembered(on) => self.is_user_remembered = on,
            Action::SetTermsAccepted(on) => self.is_terms_accepted = on,
            Action::SetPasswordVisible { field, visible } => match field {
                PasswordField::Password => self.is_password_visible = visible,
                PasswordField::ConfirmPassword => self.is_confirm_password_visible = visible,
            },
            Action::SetAuthError(on) => self.is_auth_error = on,
            Action::SetModalVisible { modal, visible } => self.modal_mut(modal).visible = visible,
            Action::SetModalPosition { modal, position } => {
                self.modal_mut(modal).position = position;
            }
        }
    }

    pub fn modal(&self, id: ModalId) -> &ModalState {
        match id {
            ModalId::Terms => &self.terms_modal,
            ModalId::Info => &self.info_modal,
        }
    }

    fn modal_mut(&mut self, id: ModalId) -> &mut ModalState {
        match id {
            ModalId::Terms => &mut self.terms_modal,
            ModalId::Info => &mut self.info_modal,
        }
    }

    pub fn password_visible(&self, field: PasswordField) -> bool {
        match field {
            PasswordField::Password => self.is_password_visible,
            PasswordField::ConfirmPassword => self.is_confirm_password_visible,
        }
    }

    /// The topmost open modal, if any. Info sits above terms since it is
    /// opened from the header rather than the form.
    pub fn open_modal(&self) -> Option<ModalId> {
        if self.info_modal.visible {
            Some(ModalId::Info)
        } else if self.terms_modal.visible {
            Some(ModalId::Terms)
        } else {
            None
        }
    }
}
