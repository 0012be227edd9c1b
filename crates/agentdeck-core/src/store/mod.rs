pub mod conversation;
pub mod ids;

pub use conversation::{ConversationStore, PendingReply};
pub use ids::{Clock, IdGenerator};
