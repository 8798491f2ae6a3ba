use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{FieldSpec, MediationResult, Mediator, TextAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_EMAIL: &str = "elicit_email";

/// Ask the user for an email address.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitEmailArgs {
    /// A concise title for the requested email.
    pub requested_email_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_email_description: Option<String>,
}

#[async_trait]
impl FieldTool for ElicitEmailArgs {
    const NAME: &'static str = ELICIT_EMAIL;
    const TITLE: &'static str = "Request email from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user for an email address input.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please provide ...' etc.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::email(
            self.requested_email_title.clone(),
            self.requested_email_description,
        )?;
        mediator
            .mediate(self.requested_email_title, field, TextAnswer)
            .await
    }
}
