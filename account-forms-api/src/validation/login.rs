use super::messages::{EMAIL_INVALID, EMAIL_REQUIRED, LOGIN_REQUIRED, PASSWORD_TOO_SHORT};
use super::{Field, FieldErrors, PASSWORD_MIN_LEN, is_loose_email, utf16_len};
use crate::LoginRequest;

impl LoginRequest {
    /// Per-field errors shown inline by the login form.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.insert(Field::Email, EMAIL_REQUIRED);
        } else if !is_loose_email(&self.email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }

        if utf16_len(&self.password) < PASSWORD_MIN_LEN {
            errors.insert(Field::Password, PASSWORD_TOO_SHORT);
        }

        errors
    }

    /// Ordered checks run by `/api/login`; returns the first failing message.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LOGIN_REQUIRED);
        }
        if utf16_len(&self.password) < PASSWORD_MIN_LEN {
            return Err(PASSWORD_TOO_SHORT);
        }
        Ok(())
    }
}
