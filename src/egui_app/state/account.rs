//! Profile page form state.

use crate::shared::profile::{EmploymentType, ProfileUpdate, UserProfile};
use crate::shared::validation::{check_new_password, validate_email, ValidationError};

/// Editable copy of the cached profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub full_name: String,
    pub is_journalist: bool,
    pub employment_type: Option<EmploymentType>,
    pub organization_name: String,
    pub status: Option<String>,
    pub saving: bool,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            is_journalist: profile.is_journalist,
            employment_type: profile.employment_type,
            organization_name: profile.organization_name.clone().unwrap_or_default(),
            status: None,
            saving: false,
        }
    }

    /// Flip the journalist answer; employment details start over.
    pub fn set_journalist(&mut self, is_journalist: bool) {
        if self.is_journalist == is_journalist {
            return;
        }
        self.is_journalist = is_journalist;
        self.employment_type = None;
        self.organization_name.clear();
    }

    /// True when the editable fields differ from `saved`.
    pub fn has_edits(&self, saved: Option<&UserProfile>) -> bool {
        let saved = saved.map(Self::from_profile).unwrap_or_default();
        self.to_update() != saved.to_update()
    }

    /// Load fresh values from `profile`, keeping the status line and the
    /// saving flag.
    pub fn reseed(&mut self, profile: &UserProfile) {
        *self = Self {
            status: self.status.take(),
            saving: self.saving,
            ..Self::from_profile(profile)
        };
    }

    pub fn to_update(&self) -> ProfileUpdate {
        let organization = Some(self.organization_name.trim().to_string());
        ProfileUpdate::new(
            self.full_name.trim(),
            self.is_journalist,
            self.employment_type,
            organization,
        )
    }
}

/// Dialogs opened from the profile page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AccountDialog {
    #[default]
    None,
    ChangeEmail {
        new_email: String,
        error: Option<String>,
        pending: bool,
    },
    ChangePassword {
        old_password: String,
        new_password: String,
        confirmation: String,
        error: Option<String>,
        pending: bool,
    },
}

impl AccountDialog {
    pub fn change_email() -> Self {
        AccountDialog::ChangeEmail {
            new_email: String::new(),
            error: None,
            pending: false,
        }
    }

    pub fn change_password() -> Self {
        AccountDialog::ChangePassword {
            old_password: String::new(),
            new_password: String::new(),
            confirmation: String::new(),
            error: None,
            pending: false,
        }
    }

    /// Inline hint for the fields as currently typed; `None` when the
    /// dialog can be submitted.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            AccountDialog::None => None,
            AccountDialog::ChangeEmail { new_email, .. } => {
                (!validate_email(new_email.trim())).then_some(ValidationError::InvalidEmail)
            }
            AccountDialog::ChangePassword {
                old_password,
                new_password,
                confirmation,
                ..
            } => {
                if old_password.is_empty() {
                    return Some(ValidationError::MissingField("Old password"));
                }
                check_new_password(new_password, confirmation).err()
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self, AccountDialog::None) && !self.is_pending() && self.validation().is_none()
    }

    /// A request for this dialog is in flight.
    pub fn is_pending(&self) -> bool {
        match self {
            AccountDialog::None => false,
            AccountDialog::ChangeEmail { pending, .. } | AccountDialog::ChangePassword { pending, .. } => {
                *pending
            }
        }
    }

    pub fn set_pending(&mut self, value: bool) {
        match self {
            AccountDialog::None => {}
            AccountDialog::ChangeEmail { pending, .. } | AccountDialog::ChangePassword { pending, .. } => {
                *pending = value
            }
        }
    }

    /// Show a failure and allow another attempt.
    pub fn set_error(&mut self, message: String) {
        match self {
            AccountDialog::None => {}
            AccountDialog::ChangeEmail { error, pending, .. }
            | AccountDialog::ChangePassword { error, pending, .. } => {
                *error = Some(message);
                *pending = false;
            }
        }
    }
}
