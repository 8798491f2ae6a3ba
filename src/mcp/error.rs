use crate::ElicitError;
use rmcp::model::{ErrorCode, ErrorData};
use std::borrow::Cow;

impl From<ElicitError> for ErrorData {
    fn from(err: ElicitError) -> Self {
        let (code, suggestion) = match &err {
            ElicitError::InvalidArgument(_) => (
                ErrorCode::INVALID_PARAMS,
                "Check the tool's input schema: titles must be non-empty, optionNames must match options, minimum must not exceed maximum.",
            ),
            ElicitError::UnknownTool(_) => (
                ErrorCode::INVALID_PARAMS,
                "Use tools/list to see the available elicitation tools.",
            ),
            ElicitError::SchemaViolation(_) => (
                ErrorCode::INTERNAL_ERROR,
                "The client returned content that does not match the requested schema.",
            ),
            ElicitError::ProtocolViolation(_) => (
                ErrorCode::INTERNAL_ERROR,
                "The client returned an elicitation reply this server does not understand.",
            ),
            ElicitError::Transport(_) => (
                ErrorCode::INTERNAL_ERROR,
                "The elicitation request could not be delivered. The client may not support elicitation.",
            ),
        };

        ErrorData {
            code,
            message: Cow::Owned(err.to_string()),
            data: Some(serde_json::json!({
                "error_code": err.code(),
                "suggestion": suggestion,
            })),
        }
    }
}
