use serde::{Deserialize, Serialize};

/// HTTP status codes represented as an enum
/// This is WASM-compatible and doesn't depend on axum::http::StatusCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    NotFound = 404,
    MethodNotAllowed = 405,
    InternalServerError = 500,
    BadGateway = 502,
    ServiceUnavailable = 503,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Maps a raw status; codes the API never produces fall into the nearest class.
    pub fn from_u16(code: u16) -> Self {
        match code {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            c if (200..300).contains(&c) => Self::Ok,
            c if (400..500).contains(&c) => Self::BadRequest,
            _ => Self::InternalServerError,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Generic API response wrapper
///
/// The backend wraps this in a type that implements Axum's IntoResponse trait;
/// the client forms receive one from their transport.
///
/// # Examples
///
/// ```rust
/// use account_forms_api::{AppResponse, StatusCode};
///
/// let response = AppResponse::ok("data");
/// assert!(response.is_success());
///
/// let response = AppResponse::new(StatusCode::Unauthorized, "nope");
/// assert!(!response.is_success());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    /// Creates a new response with a status code and data
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// Creates an empty response with a status code
    pub fn empty(status: StatusCode) -> Self {
        Self { status, data: None }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
