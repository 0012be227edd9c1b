pub mod config;
pub mod constants;
pub mod models;
pub mod store;
pub mod tracing_setup;

pub use config::CoreConfig;
pub use store::{ConversationStore, PendingReply};
