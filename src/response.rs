use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": ...}` body used for confirmations and for every error.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
