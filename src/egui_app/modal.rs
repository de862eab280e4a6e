//! Login / registration modal workflow
//!
//! One enum describes which dialog is visible and carries the form data
//! that belongs to it, so closing a dialog drops its draft by construction.
//!
//! ```text
//! Closed ──open_login──▶ LoginOpen ──open_registration──▶ Register(One)
//!   ▲                      │  │                          │      ▲
//!   │        login ok ─────┘  └── inactive ──▶ NotActive  advance  back
//!   │                                                     ▼      │
//!   └──────────── registration ok ───────────────────── Register(Two)
//! ```
//!
//! `dismiss` returns to `Closed` from anywhere. Calls made in a state
//! where they do not apply are no-ops and return `false` / `None`.

use crate::egui_app::api::ApiError;
use crate::shared::profile::{RegisterRequest, RegistrationDraft};

/// Login dialog fields plus per-field error flags from the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_invalid: bool,
    pub password_invalid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStep {
    /// Email and password
    One,
    /// Name and journalist details
    Two,
}

/// Which dialog is visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    LoginOpen(LoginForm),
    Register {
        step: RegisterStep,
        draft: RegistrationDraft,
    },
    NotActiveNotice,
}

/// Modal state plus the message shown under the active dialog.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    modal: Modal,
    feedback: Option<String>,
    pending: bool,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// A request started from the active dialog is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.modal != Modal::Closed
    }

    pub fn open_login(&mut self) -> bool {
        if self.modal != Modal::Closed {
            return false;
        }
        self.enter(Modal::LoginOpen(LoginForm::default()));
        true
    }

    /// Close the login dialog and start the registration wizard.
    pub fn open_registration(&mut self) -> bool {
        if !matches!(self.modal, Modal::LoginOpen(_)) {
            return false;
        }
        self.enter(Modal::Register {
            step: RegisterStep::One,
            draft: RegistrationDraft::default(),
        });
        true
    }

    /// Move from step one to step two if the credentials pass validation.
    /// On failure the state is left untouched and the first failing
    /// check becomes the feedback message.
    pub fn advance(&mut self) -> bool {
        let Modal::Register { step: step @ RegisterStep::One, draft } = &mut self.modal else {
            return false;
        };
        match draft.check_credentials() {
            Ok(()) => {
                *step = RegisterStep::Two;
                self.feedback = None;
                true
            }
            Err(e) => {
                self.feedback = Some(e.to_string());
                false
            }
        }
    }

    /// Step two back to step one, keeping everything typed so far.
    pub fn back(&mut self) -> bool {
        let Modal::Register { step: step @ RegisterStep::Two, .. } = &mut self.modal else {
            return false;
        };
        *step = RegisterStep::One;
        self.feedback = None;
        true
    }

    /// Validate the draft and hand out the request to send. Only valid on
    /// step two with no request already in flight.
    pub fn registration_request(&mut self) -> Option<RegisterRequest> {
        if self.pending {
            return None;
        }
        let Modal::Register { step: RegisterStep::Two, draft } = &self.modal else {
            return None;
        };
        match draft.to_request() {
            Ok(request) => {
                self.pending = true;
                self.feedback = None;
                Some(request)
            }
            Err(e) => {
                self.feedback = Some(e.to_string());
                None
            }
        }
    }

    pub fn registration_succeeded(&mut self) -> bool {
        if !matches!(self.modal, Modal::Register { step: RegisterStep::Two, .. }) {
            return false;
        }
        self.enter(Modal::Closed);
        true
    }

    pub fn registration_failed(&mut self, error: &ApiError) {
        self.pending = false;
        if matches!(self.modal, Modal::Register { .. }) {
            self.feedback = Some(format!("Registration failed: {}", error));
        }
    }

    /// Credentials to send from the login dialog.
    pub fn login_request(&mut self) -> Option<(String, String)> {
        if self.pending {
            return None;
        }
        let Modal::LoginOpen(form) = &mut self.modal else {
            return None;
        };
        if form.email.trim().is_empty() || form.password.is_empty() {
            self.feedback = Some("Email and password are required".to_string());
            return None;
        }
        form.email_invalid = false;
        form.password_invalid = false;
        self.pending = true;
        self.feedback = None;
        Some((form.email.trim().to_string(), form.password.clone()))
    }

    pub fn login_succeeded(&mut self) -> bool {
        if !matches!(self.modal, Modal::LoginOpen(_)) {
            self.pending = false;
            return false;
        }
        self.enter(Modal::Closed);
        true
    }

    /// Route a rejected login: field errors stay on the form, an inactive
    /// account switches to the notice.
    pub fn login_failed(&mut self, error: &ApiError) {
        self.pending = false;
        let Modal::LoginOpen(form) = &mut self.modal else {
            return;
        };
        match error {
            ApiError::InvalidEmail => {
                form.email_invalid = true;
                self.feedback = Some(error.to_string());
            }
            ApiError::InvalidPassword => {
                form.password_invalid = true;
                self.feedback = Some(error.to_string());
            }
            ApiError::AccountInactive => self.enter(Modal::NotActiveNotice),
            ApiError::Transport(_) => {
                self.feedback = Some("Login failed. Check your connection and try again.".to_string())
            }
            other => self.feedback = Some(other.to_string()),
        }
    }

    pub fn dismiss(&mut self) {
        self.enter(Modal::Closed);
    }

    fn enter(&mut self, modal: Modal) {
        self.modal = modal;
        self.feedback = None;
        self.pending = false;
    }
}
