use serde::{Deserialize, Serialize};

/// Uniform response envelope: every endpoint answers HTTP 200 with a
/// `success` flag, and failures carry a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Successful single-record lookup. The record is returned in its
/// serialized line form, not as a structured object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundBook {
    pub success: bool,
    pub book: String,
}

/// Successful author-scoped lookup, records in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundBooks {
    pub success: bool,
    pub books: Vec<String>,
}
