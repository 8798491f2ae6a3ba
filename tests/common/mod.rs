#![allow(dead_code)]

//! Shared test helpers: in-memory elicitation transports.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use elicit::elicitation::{
    ElicitationReply, ElicitationRequest, ElicitationTransport, Mediator,
};
use elicit::ElicitError;
use serde_json::{json, Value};

/// Replays scripted replies in order and records every request sent.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ElicitationReply, ElicitError>>>,
    sent: Mutex<Vec<ElicitationRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(reply: ElicitationReply) -> Arc<Self> {
        let transport = Self::new();
        transport.push(Ok(reply));
        transport
    }

    /// Reply with an arbitrary raw JSON object, e.g. an unknown action.
    pub fn replying_raw(reply: Value) -> Arc<Self> {
        Self::replying(serde_json::from_value(reply).expect("raw reply must have an action"))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let transport = Self::new();
        transport.push(Err(ElicitError::Transport(message.to_string())));
        transport
    }

    pub fn push(&self, reply: Result<ElicitationReply, ElicitError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn sent(&self) -> Vec<ElicitationRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Wire form (`{ method, params }`) of the only request sent.
    pub fn single_wire_request(&self) -> Value {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request");
        sent[0].to_wire()
    }

    pub fn mediator(self: &Arc<Self>) -> Mediator {
        Mediator::new(self.clone())
    }
}

#[async_trait]
impl ElicitationTransport for ScriptedTransport {
    async fn send(&self, request: ElicitationRequest) -> Result<ElicitationReply, ElicitError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ElicitError::Transport("no scripted reply".into())))
    }
}

/// Accepts every request, answering with the request's own message.
pub struct EchoTransport;

#[async_trait]
impl ElicitationTransport for EchoTransport {
    async fn send(&self, request: ElicitationRequest) -> Result<ElicitationReply, ElicitError> {
        tokio::task::yield_now().await;
        Ok(ElicitationReply::accept(json!({ "answer": request.message })))
    }
}

pub fn args(value: Value) -> Option<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
