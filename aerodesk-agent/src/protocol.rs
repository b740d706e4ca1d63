use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Advertises a tool to the agent loop: its name, what it does, and a
/// JSON schema for its arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A single invocation requested by the agent loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// The JSON-encoded outcome handed back for a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_deserialization() {
        let json = r#"
            {
                "id": "call-1",
                "name": "fetch_flight_info",
                "arguments": { "origin": "SFO", "destination": "JFK" }
            }
        "#;
        let call: ToolCall = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(call.name, "fetch_flight_info");
        assert_eq!(call.arguments["origin"], json!("SFO"));
    }
}
