//! Error handling utilities for MCP server

use progdt_core::ProgdtError;
use rmcp::ErrorData;

/// Helper to convert progdt errors to MCP errors
///
/// Bad caller input becomes `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &ProgdtError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        ProgdtError::InvalidInput { .. } | ProgdtError::UnknownCommand { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
