//! # account-forms-api
//!
//! Shared API types for the account-forms service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM) applications.
//!
//! ## Features
//!
//! - Request DTOs (`LoginRequest`, `ChangePasswordRequest`, `ProfileUpdateRequest`)
//! - Response DTOs (`MessageResponse`, `SuccessResponse`) and `ErrorResponse`
//! - Field validators, identical on both sides of the wire
//! - The form submission flow (`client`), independent of any UI toolkit
//!
//! ## Example
//!
//! ```rust
//! use account_forms_api::{LoginRequest, validation::Field};
//!
//! let request = LoginRequest {
//!     email: "user@example.com".to_string(),
//!     password: "12345".to_string(),
//! };
//! let errors = request.field_errors();
//! assert!(errors.contains(Field::Password));
//! assert!(request.check().is_err());
//! ```

pub mod client;
pub mod error;
pub mod requests;
pub mod responses;
pub mod result;
pub mod validation;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
pub use validation::{Field, FieldErrors};
