use serde::{Deserialize, Serialize};

/// `{ "message": ... }`, optionally with `"success": true`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: None,
        }
    }

    /// Same message with `"success": true` attached.
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: Some(true),
        }
    }
}

/// Body of a successful profile update: `{ "success": true }`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self { success: true }
    }
}
