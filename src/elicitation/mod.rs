//! Elicitation core: field specifications, extraction contracts and the
//! mediator that runs a single request/reply exchange.

pub mod contract;
pub mod field;
pub mod mediator;

pub use contract::{AnswerContract, BooleanAnswer, FnContract, NumberAnswer, TextAnswer};
pub use field::{DateFormat, FieldSpec, RequestedSchema, StringFormat};
pub use mediator::{
    ElicitationAction, ElicitationReply, ElicitationRequest, ElicitationTransport,
    MediationResult, Mediator, Outcome, ELICITATION_METHOD,
};
