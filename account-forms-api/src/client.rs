//! Submission flow of the account forms.
//!
//! The UI layer and the toast mechanism stay outside this crate: a form only
//! talks to a [`Transport`] (the HTTP exchange) and a [`Notifier`] (toasts).

use std::future::Future;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::validation::FieldErrors;
use crate::validation::messages::{GENERIC_ERROR, LOGIN_SUCCESSFUL, NETWORK_ERROR};
use crate::{AppResponse, ChangePasswordRequest, LoginRequest, ProfileUpdateRequest, StatusCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

pub const LOGIN_ENDPOINT: Endpoint = Endpoint {
    method: Method::Post,
    path: "/api/login",
};
pub const PASSWORD_ENDPOINT: Endpoint = Endpoint {
    method: Method::Post,
    path: "/api/password",
};
pub const PROFILE_ENDPOINT: Endpoint = Endpoint {
    method: Method::Put,
    path: "/api/profile",
};

/// The request could not be sent, or the reply body was not JSON.
#[derive(Debug, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// JSON-over-HTTP exchange used by the forms.
pub trait Transport {
    fn send(
        &self,
        endpoint: Endpoint,
        body: Value,
    ) -> impl Future<Output = Result<AppResponse<Value>, TransportError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Loading(String),
    Success(String),
    Error(String),
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Field set backing one form.
pub trait FormModel: Serialize + Default {
    const ENDPOINT: Endpoint;
    const LOADING_MESSAGE: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    /// Whether the fields are reset after a successful submission.
    const CLEAR_ON_SUCCESS: bool;

    fn validate(&self) -> FieldErrors;

    /// Text of the success toast; the server `message` wins unless overridden.
    fn success_message(body: Option<&Value>) -> String {
        body_message(body).unwrap_or_else(|| Self::SUCCESS_MESSAGE.to_string())
    }
}

impl FormModel for LoginRequest {
    const ENDPOINT: Endpoint = LOGIN_ENDPOINT;
    const LOADING_MESSAGE: &'static str = "Logging in...";
    const SUCCESS_MESSAGE: &'static str = LOGIN_SUCCESSFUL;
    const CLEAR_ON_SUCCESS: bool = true;

    fn validate(&self) -> FieldErrors {
        self.field_errors()
    }
}

impl FormModel for ChangePasswordRequest {
    const ENDPOINT: Endpoint = PASSWORD_ENDPOINT;
    const LOADING_MESSAGE: &'static str = "Changing password...";
    const SUCCESS_MESSAGE: &'static str = "Password changed successfully!";
    const CLEAR_ON_SUCCESS: bool = true;

    fn validate(&self) -> FieldErrors {
        self.field_errors()
    }

    fn success_message(_body: Option<&Value>) -> String {
        Self::SUCCESS_MESSAGE.to_string()
    }
}

impl FormModel for ProfileUpdateRequest {
    const ENDPOINT: Endpoint = PROFILE_ENDPOINT;
    const LOADING_MESSAGE: &'static str = "Updating profile...";
    const SUCCESS_MESSAGE: &'static str = "Profile updated successfully!";
    const CLEAR_ON_SUCCESS: bool = false;

    fn validate(&self) -> FieldErrors {
        self.field_errors(Utc::now())
    }
}

fn body_message(body: Option<&Value>) -> Option<String> {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Blocked,
    Succeeded(String),
    Rejected { status: StatusCode, message: String },
    /// The fields could not be encoded as JSON; nothing was sent.
    Unencodable,
    NetworkError,
}

/// Form state: current field values, inline errors and the loading flag.
#[derive(Debug, Clone, Default)]
pub struct Form<M> {
    pub fields: M,
    errors: FieldErrors,
    loading: bool,
}

pub type LoginForm = Form<LoginRequest>;
pub type PasswordChangeForm = Form<ChangePasswordRequest>;
pub type ProfileForm = Form<ProfileUpdateRequest>;

impl<M: FormModel> Form<M> {
    pub fn new(fields: M) -> Self {
        Self {
            fields,
            errors: FieldErrors::new(),
            loading: false,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Runs validation and stores the result; returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = self.fields.validate();
        self.errors.is_empty()
    }

    pub async fn submit<T, N>(&mut self, transport: &T, notifier: &mut N) -> SubmitOutcome
    where
        T: Transport,
        N: Notifier,
    {
        if !self.validate() {
            return SubmitOutcome::Blocked;
        }

        let body = match serde_json::to_value(&self.fields) {
            Ok(body) => body,
            Err(_) => {
                notifier.notify(Notification::Error(GENERIC_ERROR.to_string()));
                return SubmitOutcome::Unencodable;
            }
        };

        self.loading = true;
        notifier.notify(Notification::Loading(M::LOADING_MESSAGE.to_string()));

        let outcome = match transport.send(M::ENDPOINT, body).await {
            Ok(reply) if reply.is_success() => {
                let message = M::success_message(reply.data.as_ref());
                notifier.notify(Notification::Success(message.clone()));
                if M::CLEAR_ON_SUCCESS {
                    self.fields = M::default();
                    self.errors.clear();
                }
                SubmitOutcome::Succeeded(message)
            }
            Ok(reply) => {
                let message =
                    body_message(reply.data.as_ref()).unwrap_or_else(|| GENERIC_ERROR.to_string());
                notifier.notify(Notification::Error(message.clone()));
                SubmitOutcome::Rejected {
                    status: reply.status,
                    message,
                }
            }
            Err(_) => {
                notifier.notify(Notification::Error(NETWORK_ERROR.to_string()));
                SubmitOutcome::NetworkError
            }
        };

        self.loading = false;
        outcome
    }
}
