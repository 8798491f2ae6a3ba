//! Tool registry: tool name -> (advertised metadata, handler).
//!
//! Built once at startup and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::instrument;

use crate::elicitation::{MediationResult, Mediator};
use crate::mcp::tools::{
    ElicitBooleanArgs, ElicitDateTimeArgs, ElicitEmailArgs, ElicitInformationArgs,
    ElicitNumberArgs, ElicitOptionsArgs, ElicitUriArgs, FieldTool,
};
use crate::ElicitError;

type Handler = fn(JsonObject, Mediator) -> BoxFuture<'static, Result<MediationResult, ElicitError>>;

/// Advertised metadata plus the handler behind it.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    handler: Handler,
}

#[derive(Clone, Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every field tool, in advertised order.
    pub fn standard() -> Self {
        Self::new()
            .register::<ElicitInformationArgs>()
            .register::<ElicitOptionsArgs>()
            .register::<ElicitBooleanArgs>()
            .register::<ElicitNumberArgs>()
            .register::<ElicitDateTimeArgs>()
            .register::<ElicitEmailArgs>()
            .register::<ElicitUriArgs>()
    }

    /// Add a tool. Registering the same name twice replaces the earlier entry.
    pub fn register<T: FieldTool>(mut self) -> Self {
        let entry = ToolEntry {
            tool: describe::<T>(),
            handler: handle::<T>,
        };
        match self.by_name.get(T::NAME) {
            Some(&index) => {
                tracing::warn!("Tool {} registered twice; keeping the last one", T::NAME);
                self.entries[index] = entry;
            }
            None => {
                self.by_name.insert(T::NAME.to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Advertised tools in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|entry| entry.tool.clone()).collect()
    }

    /// Validate `arguments` for `name` and run its handler with `mediator`.
    ///
    /// Missing arguments are treated as an empty object.
    #[instrument(name = "elicit.dispatch", skip(self, arguments, mediator))]
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        mediator: Mediator,
    ) -> Result<MediationResult, ElicitError> {
        let entry = self.get(name).ok_or_else(|| {
            tracing::warn!("Call to unregistered tool {}", name);
            ElicitError::UnknownTool(name.to_string())
        })?;

        (entry.handler)(arguments.unwrap_or_default(), mediator).await
    }
}

fn handle<T: FieldTool>(
    arguments: JsonObject,
    mediator: Mediator,
) -> BoxFuture<'static, Result<MediationResult, ElicitError>> {
    Box::pin(async move {
        let args = parse_arguments::<T>(arguments)?;
        args.elicit(&mediator).await
    })
}

fn parse_arguments<T: FieldTool>(arguments: JsonObject) -> Result<T, ElicitError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        tracing::warn!("Invalid arguments for {}: {}", T::NAME, e);
        ElicitError::InvalidArgument(format!("{}: {}", T::NAME, e))
    })
}

fn describe<T: FieldTool>() -> Tool {
    let mut tool = Tool::new(T::NAME, T::DESCRIPTION, Arc::new(input_schema::<T>()));
    tool.title = Some(T::TITLE.to_string());
    tool
}

/// JSON schema for a tool's arguments, generated from the argument struct.
pub fn input_schema<T: FieldTool>() -> JsonObject {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => schema,
        Ok(other) => {
            tracing::warn!("Input schema for {} is not an object: {}", T::NAME, other);
            JsonObject::new()
        }
        Err(e) => {
            tracing::warn!("Failed to serialize input schema for {}: {}", T::NAME, e);
            JsonObject::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tools::{
        ELICIT_BOOLEAN, ELICIT_DATE_TIME, ELICIT_EMAIL, ELICIT_INFORMATION, ELICIT_NUMBER,
        ELICIT_OPTIONS, ELICIT_URI,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_registry_order() {
        let names: Vec<String> = ToolRegistry::standard()
            .list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                ELICIT_INFORMATION,
                ELICIT_OPTIONS,
                ELICIT_BOOLEAN,
                ELICIT_NUMBER,
                ELICIT_DATE_TIME,
                ELICIT_EMAIL,
                ELICIT_URI,
            ]
        );
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let registry = ToolRegistry::new()
            .register::<ElicitEmailArgs>()
            .register::<ElicitEmailArgs>();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_input_schema_uses_camel_case_properties() {
        let schema = input_schema::<ElicitOptionsArgs>();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("requestedInformationTitle"));
        assert!(properties.contains_key("optionNames"));

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"options"));
        assert!(!required.contains(&"optionNames"));
    }

    #[test]
    fn test_every_tool_advertises_an_object_schema() {
        for tool in ToolRegistry::standard().list_tools() {
            assert_eq!(tool.input_schema.get("type"), Some(&Value::from("object")), "{}", tool.name);
            assert!(tool.input_schema.contains_key("properties"), "{}", tool.name);
        }
    }

    #[test]
    fn test_tool_metadata() {
        let registry = ToolRegistry::standard();
        let entry = registry.get(ELICIT_BOOLEAN).unwrap();
        let advertised = serde_json::to_value(&entry.tool).unwrap();
        assert_eq!(advertised["name"], "elicit_boolean");
        assert_eq!(advertised["title"], "Request Boolean from user");
        assert!(advertised["description"]
            .as_str()
            .unwrap_or_default()
            .contains("double negatives"));
        assert_eq!(advertised["inputSchema"]["type"], "object");
    }
}
