//! User-facing texts. Clients and tests match on these exact strings.

// Login
pub const LOGIN_REQUIRED: &str = "Email and password are required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is invalid.";

// Password change, server
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const NEW_PASSWORD_TOO_SHORT: &str = "New password must be at least 6 characters.";
pub const NEW_PASSWORD_MISMATCH: &str = "New password and confirm password do not match.";
pub const NEW_PASSWORD_UNCHANGED: &str = "New password must be different from current password.";

// Password change, client
pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required.";
pub const NEW_PASSWORD_REQUIRED: &str = "New password is required.";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your new password.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

// Profile
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 6 characters.";
pub const FULL_NAME_REQUIRED: &str = "Full name is required.";
pub const EMAIL_FORMAT: &str = "Must be a valid email format.";
pub const PHONE_FORMAT: &str = "Phone must be 10-15 digits.";
pub const BIRTH_DATE_IN_FUTURE: &str = "Birth date cannot be in the future.";
pub const BIO_TOO_LONG: &str = "Bio must be 160 characters or less.";

// Account service
pub const LOGIN_SUCCESSFUL: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const PASSWORD_UPDATED: &str = "Password updated successfully!";
pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect.";
pub const INVALID_REQUEST_FORMAT: &str = "Invalid request format.";

// Client notifications
pub const GENERIC_ERROR: &str = "An error occurred.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
