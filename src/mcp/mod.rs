pub mod error;
pub mod server;
pub mod tools;
pub mod transport;

pub use server::{run_mcp_server, ElicitServer};
pub use tools::{FieldTool, ToolRegistry};
