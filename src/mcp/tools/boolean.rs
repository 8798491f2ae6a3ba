use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{BooleanAnswer, FieldSpec, MediationResult, Mediator};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_BOOLEAN: &str = "elicit_boolean";

/// Ask the user a yes/no question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitBooleanArgs {
    /// A concise question that can be answered with a Boolean response (yes/no, true/false, on/off etc.)
    pub question: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub question_description: Option<String>,
}

#[async_trait]
impl FieldTool for ElicitBooleanArgs {
    const NAME: &'static str = ELICIT_BOOLEAN;
    const TITLE: &'static str = "Request Boolean from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user for a Boolean response (yes/no, true/false, on/off etc.).
Only provide a brief question. Make sure that the question avoids double negatives.
Avoid using lengthy phrases like 'Please select ...' etc.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::boolean(self.question.clone(), self.question_description)?;
        mediator.mediate(self.question, field, BooleanAnswer).await
    }
}
