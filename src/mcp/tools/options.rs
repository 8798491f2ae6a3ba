use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{FieldSpec, MediationResult, Mediator, TextAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_OPTIONS: &str = "elicit_options";

/// Ask the user to pick one value from a closed list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitOptionsArgs {
    /// A concise title for the requested information.
    pub requested_information_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_information_description: Option<String>,
    /// An array of option values to choose from.
    pub options: Vec<String>,
    /// An optional array of human-readable names for the options. Must match the length and order of options if provided.
    #[serde(default)]
    pub option_names: Option<Vec<String>>,
}

#[async_trait]
impl FieldTool for ElicitOptionsArgs {
    const NAME: &'static str = ELICIT_OPTIONS;
    const TITLE: &'static str = "Request a choice from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user to select from a list of options.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please select ...' etc.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::choice(
            self.requested_information_title.clone(),
            self.requested_information_description,
            self.options,
            self.option_names,
        )?;
        mediator
            .mediate(self.requested_information_title, field, TextAnswer)
            .await
    }
}
