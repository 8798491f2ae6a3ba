//! The elicitation mediator: one request, one reply, one normalized outcome.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{AnnotateAble, CallToolResult, RawContent, Role};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

use crate::elicitation::contract::AnswerContract;
use crate::elicitation::field::{FieldSpec, RequestedSchema};
use crate::ElicitError;

/// JSON-RPC method used for every outbound request.
pub const ELICITATION_METHOD: &str = "elicitation/create";

pub const NARRATION_NO_ANSWER: &str = "User didn't provide an answer.";
pub const NARRATION_DECLINED: &str = "User declined to answer.";
pub const NARRATION_CANCELED: &str = "User canceled the dialog.";
const NARRATION_ANSWERED_PREFIX: &str = "User answered with: ";

/// Parameters of an `elicitation/create` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElicitationRequest {
    pub message: String,
    pub requested_schema: RequestedSchema,
}

impl ElicitationRequest {
    pub fn new(message: impl Into<String>, field: FieldSpec) -> Self {
        Self {
            message: message.into(),
            requested_schema: field.into(),
        }
    }

    /// Full request envelope: `{ method, params }`.
    pub fn to_wire(&self) -> Value {
        json!({ "method": ELICITATION_METHOD, "params": self })
    }
}

/// Raw reply from the human-facing side. `action` stays a string so that
/// unrecognized values can be reported instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElicitationReply {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl ElicitationReply {
    pub fn accept(content: Value) -> Self {
        Self {
            action: ElicitationAction::Accept.to_string(),
            content: Some(content),
        }
    }

    pub fn decline() -> Self {
        Self {
            action: ElicitationAction::Decline.to_string(),
            content: None,
        }
    }

    pub fn cancel() -> Self {
        Self {
            action: ElicitationAction::Cancel.to_string(),
            content: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElicitationAction {
    Accept,
    Decline,
    Cancel,
}

impl FromStr for ElicitationAction {
    type Err = ElicitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(ElicitationAction::Accept),
            "decline" => Ok(ElicitationAction::Decline),
            "cancel" => Ok(ElicitationAction::Cancel),
            other => Err(ElicitError::unknown_action(other)),
        }
    }
}

impl fmt::Display for ElicitationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElicitationAction::Accept => "accept",
            ElicitationAction::Decline => "decline",
            ElicitationAction::Cancel => "cancel",
        })
    }
}

/// Carries one elicitation request to the human and returns the reply.
///
/// Transport failures (disconnects, timeouts) are reported as
/// [`ElicitError::Transport`] and are not retried.
#[async_trait]
pub trait ElicitationTransport: Send + Sync {
    async fn send(&self, request: ElicitationRequest) -> Result<ElicitationReply, ElicitError>;
}

/// Terminal state of one elicitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered(String),
    /// Accepted, but without a usable value.
    Unanswered,
    Declined,
    Canceled,
}

/// Normalized result handed back to the tool caller.
///
/// `answer()` is `Some` exactly when the narration is the "answered with"
/// template, since both are derived from the same [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediationResult {
    outcome: Outcome,
}

impl MediationResult {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Answered(answer) => Some(answer),
            _ => None,
        }
    }

    pub fn narration(&self) -> String {
        match &self.outcome {
            Outcome::Answered(answer) => format!("{NARRATION_ANSWERED_PREFIX}{answer}"),
            Outcome::Unanswered => NARRATION_NO_ANSWER.to_string(),
            Outcome::Declined => NARRATION_DECLINED.to_string(),
            Outcome::Canceled => NARRATION_CANCELED.to_string(),
        }
    }

    /// Machine-readable payload: `{ "answer": string | null }`.
    pub fn structured(&self) -> Value {
        json!({ "answer": self.answer() })
    }
}

impl From<MediationResult> for CallToolResult {
    fn from(result: MediationResult) -> Self {
        let structured = result.structured();
        let contents = vec![
            RawContent::text(structured.to_string()).with_audience(vec![Role::Assistant]),
            RawContent::text(result.narration()).with_audience(vec![Role::Assistant]),
        ];
        let mut call_result = CallToolResult::success(contents);
        call_result.structured_content = Some(structured);
        call_result
    }
}

/// Runs elicitation exchanges over a shared transport.
///
/// Holds no per-call state; clones share the transport only.
#[derive(Clone)]
pub struct Mediator {
    transport: Arc<dyn ElicitationTransport>,
}

impl Mediator {
    pub fn new(transport: Arc<dyn ElicitationTransport>) -> Self {
        Self { transport }
    }

    /// Send one request for `field`, wait for the reply, and normalize it.
    #[instrument(name = "elicit.mediate", skip_all, fields(title = field.title()))]
    pub async fn mediate<C: AnswerContract>(
        &self,
        message: impl Into<String> + Send,
        field: FieldSpec,
        contract: C,
    ) -> Result<MediationResult, ElicitError> {
        let request = ElicitationRequest::new(message, field);
        tracing::debug!("Sending elicitation request: {}", request.to_wire());

        let reply = self.transport.send(request).await?;
        let action: ElicitationAction = reply.action.parse()?;

        let outcome = match action {
            ElicitationAction::Accept => match reply.content {
                Some(content) => match extract(&contract, content)? {
                    Some(answer) => Outcome::Answered(answer),
                    None => Outcome::Unanswered,
                },
                None => Outcome::Unanswered,
            },
            ElicitationAction::Decline => Outcome::Declined,
            ElicitationAction::Cancel => Outcome::Canceled,
        };

        tracing::info!("Elicitation finished: {:?}", outcome);
        Ok(MediationResult::new(outcome))
    }
}

fn extract<C: AnswerContract>(contract: &C, content: Value) -> Result<Option<String>, ElicitError> {
    if content.is_null() {
        return Ok(None);
    }
    if !content.is_object() {
        return Err(ElicitError::SchemaViolation(format!(
            "expected an object, got {content}"
        )));
    }

    let reply: C::Reply = serde_json::from_value(content).map_err(|e| {
        tracing::warn!("Reply content rejected: {}", e);
        ElicitError::SchemaViolation(e.to_string())
    })?;

    Ok(contract.extract(reply)?.filter(|answer| !answer.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!("accept".parse::<ElicitationAction>().unwrap(), ElicitationAction::Accept);
        assert_eq!("decline".parse::<ElicitationAction>().unwrap(), ElicitationAction::Decline);
        assert_eq!("cancel".parse::<ElicitationAction>().unwrap(), ElicitationAction::Cancel);
        assert!(matches!(
            "Accept".parse::<ElicitationAction>(),
            Err(ElicitError::ProtocolViolation(_))
        ));
    }

    #[test]
    fn test_narration_templates() {
        let answered = MediationResult::new(Outcome::Answered("blue".into()));
        assert_eq!(answered.narration(), "User answered with: blue");
        assert_eq!(answered.structured(), json!({ "answer": "blue" }));

        for (outcome, text) in [
            (Outcome::Unanswered, NARRATION_NO_ANSWER),
            (Outcome::Declined, NARRATION_DECLINED),
            (Outcome::Canceled, NARRATION_CANCELED),
        ] {
            let result = MediationResult::new(outcome);
            assert_eq!(result.narration(), text);
            assert_eq!(result.structured(), json!({ "answer": null }));
        }
    }

    #[test]
    fn test_request_wire_envelope() {
        let field = FieldSpec::boolean("Continue?", None).unwrap();
        let request = ElicitationRequest::new("Continue?", field);
        assert_eq!(
            request.to_wire(),
            json!({
                "method": "elicitation/create",
                "params": {
                    "message": "Continue?",
                    "requestedSchema": {
                        "type": "object",
                        "properties": { "answer": { "type": "boolean", "title": "Continue?" } }
                    }
                }
            })
        );
    }

    #[test]
    fn test_reply_with_null_content_deserializes_as_absent() {
        let reply: ElicitationReply =
            serde_json::from_value(json!({ "action": "accept", "content": null })).unwrap();
        assert_eq!(reply.content, None);
    }

    #[test]
    fn test_call_tool_result_carries_both_encodings() {
        let result: CallToolResult = MediationResult::new(Outcome::Answered("42".into())).into();
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.structured_content, Some(json!({ "answer": "42" })));
        assert_eq!(result.is_error, Some(false));
    }
}
