use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elicitation::{DateFormat, FieldSpec, MediationResult, Mediator, TextAnswer};
use crate::mcp::tools::FieldTool;
use crate::ElicitError;

pub const ELICIT_DATE_TIME: &str = "elicit_date_time";

/// Ask the user for a date, or a date and time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElicitDateTimeArgs {
    /// A concise title for the requested date/time.
    pub requested_date_time_title: String,
    /// An optional concise description for the requested information.
    #[serde(default)]
    pub requested_date_time_description: Option<String>,
    /// The format for the date/time input. 'date' for date only, 'date-time' for date and time.
    #[serde(default)]
    pub format: DateFormat,
}

#[async_trait]
impl FieldTool for ElicitDateTimeArgs {
    const NAME: &'static str = ELICIT_DATE_TIME;
    const TITLE: &'static str = "Request date/time from user";
    const DESCRIPTION: &'static str = "A tool to prompt the user for a date or date-time input.
Only provide a brief title for the information being requested.
Avoid using lengthy phrases like 'Please provide ...' etc.
You can choose between date-only or date-time format.";

    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError> {
        let field = FieldSpec::date_time(
            self.requested_date_time_title.clone(),
            self.requested_date_time_description,
            self.format,
        )?;
        mediator
            .mediate(self.requested_date_time_title, field, TextAnswer)
            .await
    }
}
