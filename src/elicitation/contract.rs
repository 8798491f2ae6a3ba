//! Answer extraction contracts.
//!
//! A contract pairs the shape a reply's `content` must have (its `Reply`
//! type, validated through serde) with a pure function turning a validated
//! reply into a normalized answer, or no answer.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::ElicitError;

pub trait AnswerContract: Send + Sync {
    /// Expected shape of the reply `content`.
    type Reply: DeserializeOwned + Send;

    /// Map a validated reply to an answer. `Ok(None)` means no answer; errors
    /// propagate to the caller unchanged.
    fn extract(&self, reply: Self::Reply) -> Result<Option<String>, ElicitError>;
}

/// Reply whose `answer` is a string, null, or absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextReply {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Reply whose `answer` may be any JSON value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BooleanReply {
    #[serde(default)]
    pub answer: Option<Value>,
}

/// Reply whose `answer` is a number, null, or absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberReply {
    #[serde(default)]
    pub answer: Option<f64>,
}

/// Strings: blank answers count as no answer, others pass through untrimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnswer;

impl AnswerContract for TextAnswer {
    type Reply = TextReply;

    fn extract(&self, reply: TextReply) -> Result<Option<String>, ElicitError> {
        Ok(reply.answer.filter(|a| !a.trim().is_empty()))
    }
}

/// Only JSON booleans are answers; `false` included.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanAnswer;

impl AnswerContract for BooleanAnswer {
    type Reply = BooleanReply;

    fn extract(&self, reply: BooleanReply) -> Result<Option<String>, ElicitError> {
        Ok(match reply.answer {
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }
}

/// Numbers rendered in shortest decimal form (`5`, `2.5`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberAnswer;

impl AnswerContract for NumberAnswer {
    type Reply = NumberReply;

    fn extract(&self, reply: NumberReply) -> Result<Option<String>, ElicitError> {
        Ok(reply.answer.filter(|n| n.is_finite()).map(|n| n.to_string()))
    }
}

/// Ad-hoc contract built from a reply type and a closure.
pub struct FnContract<T, F> {
    extract: F,
    _reply: PhantomData<fn() -> T>,
}

impl<T, F> FnContract<T, F>
where
    T: DeserializeOwned + Send,
    F: Fn(T) -> Result<Option<String>, ElicitError> + Send + Sync,
{
    pub fn new(extract: F) -> Self {
        Self {
            extract,
            _reply: PhantomData,
        }
    }
}

impl<T, F> AnswerContract for FnContract<T, F>
where
    T: DeserializeOwned + Send,
    F: Fn(T) -> Result<Option<String>, ElicitError> + Send + Sync,
{
    type Reply = T;

    fn extract(&self, reply: T) -> Result<Option<String>, ElicitError> {
        (self.extract)(reply)
    }
}
