use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonResponse {
    pub code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommonResponse {
    pub fn ok(code: u16) -> Self {
        Self {
            code,
            message: None,
        }
    }

    pub fn error(code: u16, message: impl ToString) -> Self {
        Self {
            code,
            message: Some(message.to_string()),
        }
    }
}
