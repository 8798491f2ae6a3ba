use thiserror::Error;

/// Error type for elicitation operations.
///
/// Every variant is local to the call that produced it. Nothing here is
/// retried by this crate.
#[derive(Debug, Error)]
pub enum ElicitError {
    /// Caller-supplied arguments violate a precondition. Raised before any
    /// request is sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dispatch received a tool name with no registered handler.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The reply `content` does not match the shape the extractor expects.
    #[error("reply does not match expected shape: {0}")]
    SchemaViolation(String),

    /// The peer broke the elicitation protocol (e.g. an unrecognized action).
    #[error("{0}")]
    ProtocolViolation(String),

    /// Sending the request or receiving the reply failed.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ElicitError {
    /// Stable machine-readable code, surfaced to MCP clients in error data.
    pub fn code(&self) -> &'static str {
        match self {
            ElicitError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ElicitError::UnknownTool(_) => "UNKNOWN_TOOL",
            ElicitError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            ElicitError::ProtocolViolation(_) => "PROTOCOL_VIOLATION",
            ElicitError::Transport(_) => "TRANSPORT",
        }
    }

    pub(crate) fn unknown_action(action: &str) -> Self {
        ElicitError::ProtocolViolation(format!("unknown elicitation action: `{action}`"))
    }
}

impl From<rmcp::service::ServiceError> for ElicitError {
    fn from(err: rmcp::service::ServiceError) -> Self {
        ElicitError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_names_the_value() {
        let err = ElicitError::unknown_action("surprise");
        assert_eq!(err.to_string(), "unknown elicitation action: `surprise`");
        assert_eq!(err.code(), "PROTOCOL_VIOLATION");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ElicitError::InvalidArgument("minimum must be <= maximum".into());
        assert_eq!(err.to_string(), "invalid argument: minimum must be <= maximum");
    }
}
