use super::messages::{
    ALL_FIELDS_REQUIRED, CONFIRM_PASSWORD_REQUIRED, CURRENT_PASSWORD_REQUIRED, EMAIL_INVALID,
    EMAIL_REQUIRED, NEW_PASSWORD_MISMATCH, NEW_PASSWORD_REQUIRED, NEW_PASSWORD_TOO_SHORT,
    NEW_PASSWORD_UNCHANGED, PASSWORDS_DO_NOT_MATCH,
};
use super::{Field, FieldErrors, PASSWORD_MIN_LEN, is_loose_email, utf16_len};
use crate::ChangePasswordRequest;

impl ChangePasswordRequest {
    /// Per-field errors shown by the change-password form. Never short-circuits.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.insert(Field::Email, EMAIL_REQUIRED);
        } else if !is_loose_email(&self.email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }

        if self.current_password.is_empty() {
            errors.insert(Field::CurrentPassword, CURRENT_PASSWORD_REQUIRED);
        }

        if self.new_password.is_empty() {
            errors.insert(Field::NewPassword, NEW_PASSWORD_REQUIRED);
        } else if utf16_len(&self.new_password) < PASSWORD_MIN_LEN {
            errors.insert(Field::NewPassword, NEW_PASSWORD_TOO_SHORT);
        }

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, CONFIRM_PASSWORD_REQUIRED);
        } else if self.new_password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, PASSWORDS_DO_NOT_MATCH);
        }

        // Overrides a length error on the same field.
        if !self.current_password.is_empty() && self.current_password == self.new_password {
            errors.insert(Field::NewPassword, NEW_PASSWORD_UNCHANGED);
        }

        errors
    }

    /// Ordered checks run by `/api/password`: required, length, match, difference.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.email.is_empty()
            || self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ALL_FIELDS_REQUIRED);
        }
        if utf16_len(&self.new_password) < PASSWORD_MIN_LEN {
            return Err(NEW_PASSWORD_TOO_SHORT);
        }
        if self.new_password != self.confirm_password {
            return Err(NEW_PASSWORD_MISMATCH);
        }
        if self.current_password == self.new_password {
            return Err(NEW_PASSWORD_UNCHANGED);
        }
        Ok(())
    }
}
