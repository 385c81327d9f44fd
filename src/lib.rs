// Public API for integration tests and potential library usage

pub mod content;
pub mod llm;
pub mod session;
pub mod types;
