use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{FieldSpec, MediationResult, Mediator, TextAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_URI: &str = "elicit_uri";

/// Ask the user for a URI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitUriArgs {
    /// A concise title for the requested URI.
    pub requested_uri_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_uri_description: Option<String>,
}

#[async_trait]
impl FieldTool for ElicitUriArgs {
    const NAME: &'static str = ELICIT_URI;
    const TITLE: &'static str = "Request URI from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user for a URI input.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please provide ...' etc.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::uri(self.requested_uri_title.clone(), self.requested_uri_description)?;
        mediator
            .mediate(self.requested_uri_title, field, TextAnswer)
            .await
    }
}
