use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{FieldSpec, MediationResult, Mediator, NumberAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_NUMBER: &str = "elicit_number";

/// Ask the user for a number, optionally bounded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitNumberArgs {
    /// A concise title for the requested number.
    pub requested_number_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_number_description: Option<String>,
    /// An optional minimum value constraint.
    #[serde(default)]
    pub minimum: Option<f64>,
    /// An optional maximum value constraint.
    #[serde(default)]
    pub maximum: Option<f64>,
}

#[async_trait]
impl FieldTool for ElicitNumberArgs {
    const NAME: &'static str = ELICIT_NUMBER;
    const TITLE: &'static str = "Request number from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user for a number input.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please provide ...' etc.
You can optionally specify minimum and maximum constraints.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::number(
            self.requested_number_title.clone(),
            self.requested_number_description,
            self.minimum,
            self.maximum,
        )?;
        mediator
            .mediate(self.requested_number_title, field, NumberAnswer)
            .await
    }
}
