//! Form validators shared by the client forms and the server endpoints.
//!
//! Every form exposes `field_errors`, which collects one message per failing
//! field (first failing rule wins). Login and password change also expose
//! `check`, the ordered short-circuit variant used by the API endpoints.

mod login;
mod password;
mod profile;

pub mod messages;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use profile::{BIO_MAX_LEN, USERNAME_MIN_LEN};

/// Minimum length of any password accepted by the forms.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Loose shape used by the login and password forms: `x@y.z` anywhere in the input.
static LOOSE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("loose email pattern"));

pub(crate) fn is_loose_email(email: &str) -> bool {
    LOOSE_EMAIL.is_match(email)
}

/// Length in UTF-16 code units, the unit a browser reports for `value.length`.
pub(crate) fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Form field names, ordered the way the forms render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    FullName,
    Email,
    Password,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
    Phone,
    BirthDate,
    Bio,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::CurrentPassword => "currentPassword",
            Self::NewPassword => "newPassword",
            Self::ConfirmPassword => "confirmPassword",
            Self::Phone => "phone",
            Self::BirthDate => "birthDate",
            Self::Bio => "bio",
        }
    }
}

/// Mapping of field name to its error message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(Field, &'static str)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, &'static str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, msg)| (field, msg.to_string()))
                .collect(),
        )
    }
}
