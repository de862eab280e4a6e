//! User and profile types
//!
//! Wire shapes of the account endpoints plus the transient registration
//! draft. Employment details only make sense for journalists, and the
//! organisation name only for employed journalists; [`ProfileUpdate`]
//! and [`RegistrationDraft::to_request`] normalise the irrelevant fields
//! to `null` before anything leaves the client.

use serde::{Deserialize, Serialize};

use crate::shared::validation::{check_credentials, require, ValidationError};

/// How a journalist is employed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    #[default]
    Freelance,
    Employed,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::Freelance => "freelance",
            EmploymentType::Employed => "employed in the private/public sector",
        }
    }
}

/// Account record returned alongside the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Profile details of a logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_journalist: bool,
    #[serde(rename = "type_of_employment", default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub organization_name: Option<String>,
}

/// Body of `GET /account/get_profile/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
    pub user_profile: UserProfile,
}

/// Body of `PUT /account/update-profile/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub is_journalist: bool,
    #[serde(rename = "type_of_employment")]
    pub employment_type: Option<EmploymentType>,
    pub organization_name: Option<String>,
}

impl ProfileUpdate {
    /// Build an update, dropping the fields that do not apply.
    pub fn new(
        full_name: impl Into<String>,
        is_journalist: bool,
        employment_type: Option<EmploymentType>,
        organization_name: Option<String>,
    ) -> Self {
        let (employment_type, organization_name) =
            conditional_fields(is_journalist, employment_type, organization_name);
        Self {
            full_name: full_name.into(),
            is_journalist,
            employment_type,
            organization_name,
        }
    }
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        ProfileUpdate::new(
            profile.full_name.clone(),
            profile.is_journalist,
            profile.employment_type,
            profile.organization_name.clone(),
        )
    }
}

/// Body of `POST /account/register/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub is_journalist: bool,
    #[serde(rename = "type_of_employment")]
    pub employment_type: Option<EmploymentType>,
    pub organization_name: Option<String>,
}

/// Transient registration form state, shared by both wizard steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationDraft {
    pub email: String,
    pub password: String,
    pub confirmation_password: String,
    pub full_name: String,
    pub is_journalist: bool,
    pub employment_type: Option<EmploymentType>,
    pub organization_name: Option<String>,
}

impl RegistrationDraft {
    /// Gate between step one and step two.
    pub fn check_credentials(&self) -> Result<(), ValidationError> {
        check_credentials(&self.email, &self.password, &self.confirmation_password)
    }

    /// Validate the whole draft and build the request body.
    pub fn to_request(&self) -> Result<RegisterRequest, ValidationError> {
        self.check_credentials()?;
        require("Full name", &self.full_name)?;

        let (employment_type, organization_name) = conditional_fields(
            self.is_journalist,
            self.employment_type,
            self.organization_name.clone(),
        );
        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            is_journalist: self.is_journalist,
            employment_type,
            organization_name,
        })
    }
}

fn conditional_fields(
    is_journalist: bool,
    employment_type: Option<EmploymentType>,
    organization_name: Option<String>,
) -> (Option<EmploymentType>, Option<String>) {
    if !is_journalist {
        return (None, None);
    }
    let employment_type = Some(employment_type.unwrap_or_default());
    let organization_name = match employment_type {
        Some(EmploymentType::Employed) => organization_name.filter(|name| !name.trim().is_empty()),
        _ => None,
    };
    (employment_type, organization_name)
}
