use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{FieldSpec, MediationResult, Mediator, TextAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_INFORMATION: &str = "elicit_information";

/// Request free-form text from the user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitInformationArgs {
    /// A concise title for the requested information.
    pub requested_information_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_information_description: Option<String>,
}

#[async_trait]
impl FieldTool for ElicitInformationArgs {
    const NAME: &'static str = ELICIT_INFORMATION;
    const TITLE: &'static str = "Request information from user";
    const DESCRIPTION: &'static str = "A tool to request information directly from the user, as a free-form text input.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please provide ...' etc.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::text(
            self.requested_information_title.clone(),
            self.requested_information_description,
        )?;
        mediator
            .mediate(self.requested_information_title, field, TextAnswer)
            .await
    }
}
