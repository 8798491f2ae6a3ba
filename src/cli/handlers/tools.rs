//! Tool catalogue commands: list and schema.

use anyhow::Result;
use rmcp::model::Tool;

use crate::cli::output::{output_json, print_hint, print_table, OutputMode};
use crate::mcp::tools::ToolRegistry;
use crate::ElicitError;

/// One table row per tool: name, title, first description line.
pub fn tool_rows(tools: &[Tool]) -> Vec<Vec<String>> {
    tools
        .iter()
        .map(|tool| {
            let advertised = serde_json::to_value(tool).unwrap_or_default();
            let text = |key: &str| advertised[key].as_str().unwrap_or_default().to_string();
            let summary = text("description").lines().next().unwrap_or_default().to_string();
            vec![text("name"), text("title"), summary]
        })
        .collect()
}

pub fn handle_list_tools(mode: OutputMode) -> Result<()> {
    let tools = ToolRegistry::standard().list_tools();
    match mode {
        OutputMode::Json => output_json(&tools),
        OutputMode::Human => {
            print_table(&["Name", "Title", "Description"], tool_rows(&tools));
            print_hint("Use `elicit schema <name>` to see a tool's arguments.");
        }
    }
    Ok(())
}

pub fn handle_schema(name: &str) -> Result<()> {
    let registry = ToolRegistry::standard();
    let entry = registry
        .get(name)
        .ok_or_else(|| ElicitError::UnknownTool(name.to_string()))?;
    output_json(entry.tool.input_schema.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_use_first_description_line() {
        let rows = tool_rows(&ToolRegistry::standard().list_tools());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3][0], "elicit_number");
        assert_eq!(rows[3][2], "A tool to prompt the user for a number input.");
    }

    #[test]
    fn test_schema_for_unknown_tool_fails() {
        let err = handle_schema("elicit_color").unwrap_err();
        assert_eq!(err.to_string(), "unknown tool: elicit_color");
    }
}
