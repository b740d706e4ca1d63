use crate::protocol::{ToolCall, ToolDefinition, ToolResult};
use aerodesk_service::ServiceError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Failures crossing the tool boundary. `Service` wraps the domain's
/// own taxonomy; the agent loop turns either kind into user-facing
/// language or retries with different arguments.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("encoding tool result failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One callable tool surfaced to the agent loop.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameters(&self) -> Value;

    async fn execute(&self, arguments: Value) -> Result<String, ToolError>;
}

/// Name-keyed set of tools the agent may pick from.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn ToolExecutor>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: ToolExecutor + 'static,
    {
        tracing::debug!(tool = tool.name(), "registered tool");
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolExecutor> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn list_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters(),
            })
            .collect()
    }

    /// Dispatches a call to the named tool. Some model backends hand
    /// the arguments back as a JSON-encoded string; both forms are
    /// accepted here.
    pub async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let executor = self
            .get(&call.name)
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;

        let arguments = match call.arguments.as_str() {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| ToolError::InvalidArguments(e.to_string()))?,
            None => call.arguments.clone(),
        };

        let content = executor.execute(arguments).await?;
        Ok(ToolResult {
            tool_call_id: call.id.clone(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl ToolExecutor for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes its arguments back"
        }

        fn parameters(&self) -> Value {
            json!({ "type": "object", "properties": {}, "required": [] })
        }

        async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
            Ok(arguments.to_string())
        }
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();
        let call = ToolCall {
            id: "1".to_string(),
            name: "nope".to_string(),
            arguments: json!({}),
        };

        let error = registry.execute(&call).await.unwrap_err();
        assert!(matches!(error, ToolError::UnknownTool(name) if name == "nope"));
    }

    #[tokio::test]
    async fn test_execute_accepts_string_encoded_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let call = ToolCall {
            id: "1".to_string(),
            name: "echo".to_string(),
            arguments: json!(r#"{"origin":"SFO"}"#),
        };

        let result = registry.execute(&call).await.unwrap();
        assert_eq!(result.tool_call_id, "1");
        assert_eq!(result.content, r#"{"origin":"SFO"}"#);
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_string_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let call = ToolCall {
            id: "1".to_string(),
            name: "echo".to_string(),
            arguments: json!("{not json"),
        };

        let error = registry.execute(&call).await.unwrap_err();
        assert!(matches!(error, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_list_definitions() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let definitions = registry.list_definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "echo");
    }
}
