pub mod agent;
pub mod attachment;
pub mod message;

pub use agent::{Agent, AgentKind, AgentStatus};
pub use attachment::{Attachment, AttachmentKind};
pub use message::{Message, MessageKind};
