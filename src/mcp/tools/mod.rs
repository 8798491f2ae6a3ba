//! The seven field-capturing tools and the registry that dispatches to them.
//!
//! Each tool is an argument struct implementing [`FieldTool`]: it validates
//! its arguments into a [`FieldSpec`](crate::elicitation::FieldSpec), picks
//! an answer contract, and hands both to the [`Mediator`].

pub mod boolean;
pub mod date_time;
pub mod email;
pub mod information;
pub mod number;
pub mod options;
pub mod registry;
pub mod uri;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::elicitation::{MediationResult, Mediator};
use crate::ElicitError;

pub use boolean::{ElicitBooleanArgs, ELICIT_BOOLEAN};
pub use date_time::{ElicitDateTimeArgs, ELICIT_DATE_TIME};
pub use email::{ElicitEmailArgs, ELICIT_EMAIL};
pub use information::{ElicitInformationArgs, ELICIT_INFORMATION};
pub use number::{ElicitNumberArgs, ELICIT_NUMBER};
pub use options::{ElicitOptionsArgs, ELICIT_OPTIONS};
pub use registry::{ToolEntry, ToolRegistry};
pub use uri::{ElicitUriArgs, ELICIT_URI};

/// A tool that asks the human for one typed value.
#[async_trait]
pub trait FieldTool: DeserializeOwned + JsonSchema + Send + 'static {
    /// Tool name used in `tools/call`.
    const NAME: &'static str;
    /// Human-readable title advertised in `tools/list`.
    const TITLE: &'static str;
    /// Instructions for the model calling the tool.
    const DESCRIPTION: &'static str;

    /// Build the field, run one elicitation, return the normalized result.
    ///
    /// Argument preconditions are checked before anything is sent.
    async fn elicit(self, mediator: &Mediator) -> Result<MediationResult, ElicitError>;
}
