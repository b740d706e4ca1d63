pub mod desk;
pub mod protocol;
pub mod tools;

pub use desk::{register_desk_tools, DeskState, SharedDesk};
pub use protocol::{ToolCall, ToolDefinition, ToolResult};
pub use tools::{ToolError, ToolExecutor, ToolRegistry};
