//! Validation helper functions for the Gantt MCP server
//!
//! This module contains validation logic for instruction text and for
//! import payloads handed to the import tool.

use crate::transfer::ExportEnvelope;
use mcp_attr::Result as McpResult;

/// Validate and trim an instruction string
///
/// # Arguments
/// * `text` - Raw instruction text from the client
///
/// # Returns
/// Result containing the trimmed instruction or an invalid-params error
pub fn validate_instruction(text: &str) -> McpResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                "Instruction is empty. Provide a short Chinese command such as \
                 '创建网站开发项目，三周时间'."
                    .to_string(),
                true,
            ),
        );
    }
    Ok(trimmed)
}

/// Parse and validate an import payload
///
/// The payload must be JSON with a `project` object carrying a `tasks`
/// array; the envelope's timestamp and version are optional.
///
/// # Arguments
/// * `data` - JSON text produced by a previous export
///
/// # Returns
/// Result containing the parsed envelope or an invalid-params error
pub fn parse_import_payload(data: &str) -> McpResult<ExportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(data).map_err(|e| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
            .with_message(format!("Import data is not valid JSON: {e}"), true)
    })?;
    if !value["project"]["tasks"].is_array() {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                "Import data must contain a 'project' object with a 'tasks' array".to_string(),
                true,
            ),
        );
    }
    serde_json::from_value(value).map_err(|e| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!("Import data does not match the export format: {e}"),
            true,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_instruction_trims() {
        assert_eq!(validate_instruction("  创建项目  ").unwrap(), "创建项目");
    }

    #[test]
    fn test_blank_instruction_is_rejected() {
        assert!(validate_instruction("   ").is_err());
        assert!(validate_instruction("").is_err());
    }

    #[test]
    fn test_import_requires_project_with_tasks() {
        assert!(parse_import_payload("not json").is_err());
        assert!(parse_import_payload(r#"{"project":{"name":"x"}}"#).is_err());
        assert!(parse_import_payload(r#"{"tasks":[]}"#).is_err());

        let envelope = parse_import_payload(r#"{"project":{"name":"x","tasks":[]}}"#).unwrap();
        assert_eq!(envelope.project.name, "x");
    }
}
