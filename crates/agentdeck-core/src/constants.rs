//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Delay before a simulated agent reply is appended, in milliseconds
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

// Seed data present in every freshly constructed store
pub const WELCOME_MESSAGE: &str = "Welcome to AI Agent Manager! Select an agent to start.";

// Fixed system log entries
pub const AGENT_PAUSED_MESSAGE: &str = "Agent paused";
pub const TASK_STOPPED_MESSAGE: &str = "Task stopped";
