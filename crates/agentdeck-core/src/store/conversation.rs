use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::CoreConfig;
use crate::constants::{AGENT_PAUSED_MESSAGE, TASK_STOPPED_MESSAGE, WELCOME_MESSAGE};
use crate::models::{Agent, AgentKind, AgentStatus, Attachment, Message, MessageKind};

use super::ids::{Clock, IdGenerator};

/// A simulated agent reply whose delay has elapsed, waiting to be appended.
///
/// Replies travel over the store's mpsc channel so that the timer task never
/// touches store state directly; the event loop routes each one back into
/// [`ConversationStore::deliver_reply`].
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub agent_id: String,
    pub content: String,
}

/// Sole authority over agent and message state.
///
/// Both sequences are append-only and insertion-ordered; agents are never
/// removed or mutated after creation. Every operation is total: there is
/// nothing here that can fail.
pub struct ConversationStore {
    agents: Vec<Agent>,
    messages: Vec<Message>,
    /// Sidebar selection; replies are attributed to this agent
    active_agent_id: Option<String>,
    reply_delay: Duration,
    ids: IdGenerator,
    clock: Clock,
    reply_tx: mpsc::UnboundedSender<PendingReply>,
    reply_rx: Option<mpsc::UnboundedReceiver<PendingReply>>,
    /// One handle per scheduled reply, so teardown can abort them all
    pending_replies: Vec<JoinHandle<()>>,
}

impl ConversationStore {
    pub fn new(config: &CoreConfig) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        let mut store = Self {
            agents: Vec::new(),
            messages: Vec::new(),
            active_agent_id: None,
            reply_delay: config.reply_delay,
            ids: IdGenerator,
            clock: Clock::default(),
            reply_tx,
            reply_rx: Some(reply_rx),
            pending_replies: Vec::new(),
        };
        store.seed();
        store
    }

    fn seed(&mut self) {
        let now = self.clock.now_millis();
        let seeds = [
            ("1", "Research Assistant", AgentStatus::Online, AgentKind::Research),
            ("2", "Data Analyst", AgentStatus::Busy, AgentKind::Analysis),
            ("3", "Creative Writer", AgentStatus::Online, AgentKind::Creative),
        ];
        for (id, name, status, kind) in seeds {
            self.agents.push(Agent {
                id: id.to_string(),
                name: name.to_string(),
                status,
                kind,
                last_active: now,
            });
        }

        self.push_message(MessageKind::System, WELCOME_MESSAGE.to_string(), None, Vec::new());
    }

    fn push_message(
        &mut self,
        kind: MessageKind,
        content: String,
        agent_id: Option<String>,
        attachments: Vec<Attachment>,
    ) {
        let message = Message {
            id: self.ids.message_id(),
            kind,
            content,
            timestamp: self.clock.now_millis(),
            agent_id,
            attachments,
        };
        self.messages.push(message);
    }

    fn push_system(&mut self, content: String) {
        self.push_message(MessageKind::System, content, None, Vec::new());
    }

    // -------------------------------------------------------------------------
    // Read access (the UI borrows, never owns)
    // -------------------------------------------------------------------------

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn active_agent(&self) -> Option<&Agent> {
        self.active_agent_id.as_deref().and_then(|id| self.agent(id))
    }

    /// Mark an agent as the active selection. Returns false for unknown ids.
    pub fn set_active_agent(&mut self, id: &str) -> bool {
        if self.agent(id).is_some() {
            self.active_agent_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// True while at least one scheduled reply has not fired yet
    pub fn has_pending_reply(&self) -> bool {
        self.pending_replies.iter().any(|h| !h.is_finished())
    }

    /// Take the receiving half of the reply channel.
    /// The event loop owns it for the lifetime of the app; callable once.
    pub fn take_reply_rx(&mut self) -> Option<mpsc::UnboundedReceiver<PendingReply>> {
        self.reply_rx.take()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Create a new agent and announce it in the transcript.
    /// Returns a clone so the caller can make it the active selection.
    pub fn create_agent(&mut self, name: &str, kind: AgentKind) -> Agent {
        let agent = Agent {
            id: self.ids.agent_id(),
            name: name.to_string(),
            status: AgentStatus::Online,
            kind,
            last_active: self.clock.now_millis(),
        };
        debug!(agent_id = %agent.id, name, "agent created");
        self.agents.push(agent.clone());
        self.push_system(format!("New agent \"{}\" created successfully!", name));
        agent
    }

    /// Append a user message and schedule exactly one simulated reply.
    ///
    /// The reply fires after the configured delay on its own timer task, so
    /// sends inside the delay window each get their own reply, delivered in
    /// timer-fire order. Must be called from within a tokio runtime.
    pub fn send_message(&mut self, content: &str, attachments: Vec<Attachment>) {
        self.push_message(MessageKind::User, content.to_string(), None, attachments);

        // Attribute the reply to the active agent; before any selection has
        // been made the first seeded agent answers.
        let Some(responder) = self
            .active_agent()
            .or_else(|| self.agents.first())
            .map(|a| a.id.clone())
        else {
            return;
        };

        let reply = PendingReply {
            agent_id: responder,
            content: format!(
                "I received your message: \"{}\". I'm processing your request...",
                content
            ),
        };

        let tx = self.reply_tx.clone();
        let delay = self.reply_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only disappears on teardown; a dropped reply is fine then
            let _ = tx.send(reply);
        });

        self.pending_replies.retain(|h| !h.is_finished());
        self.pending_replies.push(handle);
    }

    /// Append a reply whose timer has fired. Called by the event loop.
    pub fn deliver_reply(&mut self, reply: PendingReply) {
        debug!(agent_id = %reply.agent_id, "simulated reply delivered");
        self.push_message(
            MessageKind::Agent,
            reply.content,
            Some(reply.agent_id),
            Vec::new(),
        );
    }

    /// Abort every scheduled reply that has not fired yet.
    pub fn cancel_pending_replies(&mut self) {
        for handle in self.pending_replies.drain(..) {
            handle.abort();
        }
    }

    /// Record a task execution request. Bookkeeping only; nothing runs.
    pub fn execute_task(&mut self, task: &str) {
        self.push_system(format!("Executing task: {}", task));
    }

    pub fn pause_agent(&mut self) {
        self.push_system(AGENT_PAUSED_MESSAGE.to_string());
    }

    pub fn stop_task(&mut self) {
        self.push_system(TASK_STOPPED_MESSAGE.to_string());
    }

    /// Record an attachment event as a user message carrying the attachment.
    /// The attachment is stored verbatim; the store never inspects it.
    pub fn attach_file(&mut self, attachment: Attachment) {
        let content = format!("Attached file: {}", attachment.name);
        self.push_message(MessageKind::User, content, None, vec![attachment]);
    }
}

impl Drop for ConversationStore {
    fn drop(&mut self) {
        // No timer may outlive the store it would write into
        self.cancel_pending_replies();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store() -> ConversationStore {
        ConversationStore::new(&CoreConfig::default())
    }

    /// Wait for the next timer to fire (the paused clock auto-advances) and
    /// route the reply back into the store, as the event loop would.
    async fn deliver_next(
        store: &mut ConversationStore,
        rx: &mut mpsc::UnboundedReceiver<PendingReply>,
    ) {
        let reply = rx.recv().await.expect("scheduled reply never fired");
        store.deliver_reply(reply);
    }

    #[test]
    fn test_seed_state() {
        let store = store();

        assert_eq!(store.agents().len(), 3);
        assert_eq!(store.agents()[0].status, AgentStatus::Online);
        assert_eq!(store.agents()[0].kind, AgentKind::Research);
        assert_eq!(store.agents()[1].status, AgentStatus::Busy);
        assert_eq!(store.agents()[1].kind, AgentKind::Analysis);
        assert_eq!(store.agents()[2].status, AgentStatus::Online);
        assert_eq!(store.agents()[2].kind, AgentKind::Creative);

        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].kind, MessageKind::System);
        assert!(store.messages()[0].content.contains("Welcome"));
    }

    #[test]
    fn test_create_agent_appends_agent_and_announcement() {
        let mut store = store();
        let created = store.create_agent("X", AgentKind::Research);

        assert_eq!(store.agents().len(), 4);
        let appended = store.agents().last().unwrap();
        assert_eq!(appended.id, created.id);
        assert_eq!(appended.name, "X");
        assert_eq!(appended.kind, AgentKind::Research);
        assert_eq!(appended.status, AgentStatus::Online);

        assert_eq!(store.messages().len(), 2);
        let announcement = store.messages().last().unwrap();
        assert_eq!(announcement.kind, MessageKind::System);
        assert!(announcement.content.contains("\"X\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_message_appends_user_then_delayed_reply() {
        let mut store = store();
        let mut rx = store.take_reply_rx().unwrap();

        let sent_at = tokio::time::Instant::now();
        store.send_message("hello", Vec::new());

        // User message is there immediately, reply is not
        assert_eq!(store.messages().len(), 2);
        let user_msg = store.messages().last().unwrap();
        assert_eq!(user_msg.kind, MessageKind::User);
        assert_eq!(user_msg.content, "hello");
        assert!(store.has_pending_reply());

        deliver_next(&mut store, &mut rx).await;
        // The paused clock auto-advanced exactly through the reply delay
        assert!(sent_at.elapsed() >= Duration::from_millis(1000));
        assert_eq!(store.messages().len(), 3);
        let reply = store.messages().last().unwrap();
        assert_eq!(reply.kind, MessageKind::Agent);
        assert!(reply.content.contains("hello"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_quick_sends_get_two_replies() {
        let mut store = store();
        let mut rx = store.take_reply_rx().unwrap();

        store.send_message("first", Vec::new());
        store.send_message("second", Vec::new());

        let user_count = |s: &ConversationStore| {
            s.messages().iter().filter(|m| m.kind == MessageKind::User).count()
        };
        let agent_count = |s: &ConversationStore| {
            s.messages().iter().filter(|m| m.kind == MessageKind::Agent).count()
        };

        assert_eq!(user_count(&store), 2);
        assert_eq!(agent_count(&store), 0);

        deliver_next(&mut store, &mut rx).await;
        deliver_next(&mut store, &mut rx).await;
        assert_eq!(agent_count(&store), 2);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_goes_to_active_agent_with_seed_fallback() {
        let mut store = store();
        let mut rx = store.take_reply_rx().unwrap();

        // No selection yet: the first seeded agent answers
        store.send_message("anyone there?", Vec::new());
        deliver_next(&mut store, &mut rx).await;
        assert_eq!(store.messages().last().unwrap().agent_id.as_deref(), Some("1"));

        assert!(store.set_active_agent("3"));
        store.send_message("now you", Vec::new());
        deliver_next(&mut store, &mut rx).await;
        assert_eq!(store.messages().last().unwrap().agent_id.as_deref(), Some("3"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let mut store = store();
        let mut rx = store.take_reply_rx().unwrap();

        store.send_message("doomed", Vec::new());
        store.cancel_pending_replies();
        assert!(!store.has_pending_reply());

        tokio::time::advance(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
        assert!(store.messages().iter().all(|m| m.kind != MessageKind::Agent));
    }

    #[test]
    fn test_task_log_operations_append_exact_messages() {
        let mut store = store();
        let agents_before = store.agents().len();

        store.execute_task("index the archive");
        store.pause_agent();
        store.stop_task();

        let tail: Vec<&str> = store
            .messages()
            .iter()
            .rev()
            .take(3)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(tail, ["Task stopped", "Agent paused", "Executing task: index the archive"]);
        assert!(store.messages().iter().rev().take(3).all(|m| m.kind == MessageKind::System));
        assert_eq!(store.agents().len(), agents_before);
    }

    #[test]
    fn test_attach_file_wraps_attachment_in_user_message() {
        let mut store = store();
        store.attach_file(Attachment {
            id: "a1".to_string(),
            name: "doc.pdf".to_string(),
            kind: crate::models::AttachmentKind::Document,
            uri: "file:///tmp/doc.pdf".to_string(),
            size: 1234,
        });

        let msg = store.messages().last().unwrap();
        assert_eq!(msg.kind, MessageKind::User);
        assert_eq!(msg.content, "Attached file: doc.pdf");
        assert_eq!(msg.attachments.len(), 1);
        assert_eq!(msg.attachments[0].name, "doc.pdf");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_unique_across_store_lifetime() {
        let mut store = store();
        let mut rx = store.take_reply_rx().unwrap();

        for i in 0..20 {
            store.create_agent(&format!("agent {}", i), AgentKind::Analysis);
            store.send_message(&format!("msg {}", i), Vec::new());
        }
        for _ in 0..20 {
            deliver_next(&mut store, &mut rx).await;
        }

        let agent_ids: HashSet<&str> = store.agents().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(agent_ids.len(), store.agents().len());

        let message_ids: HashSet<&str> = store.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(message_ids.len(), store.messages().len());
    }

    #[test]
    fn test_timestamps_monotonic_in_transcript() {
        let mut store = store();
        for i in 0..50 {
            store.execute_task(&format!("t{}", i));
        }
        let stamps: Vec<u64> = store.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_set_active_agent_rejects_unknown_id() {
        let mut store = store();
        assert!(!store.set_active_agent("nope"));
        assert!(store.active_agent().is_none());
    }
}
