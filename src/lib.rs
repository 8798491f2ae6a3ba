pub mod cli;
pub mod config;
pub mod elicitation;
pub mod error;
pub mod mcp;

pub use error::ElicitError;
