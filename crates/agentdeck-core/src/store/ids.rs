use uuid::Uuid;

/// Issues unique ids for store entries using UUID v4.
#[derive(Debug, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn agent_id(&self) -> String {
        format!("agent-{}", Uuid::new_v4())
    }

    pub fn message_id(&self) -> String {
        format!("msg-{}", Uuid::new_v4())
    }
}

/// Wall clock that never runs backwards.
///
/// Message order must stay chronological, so each reading is clamped to the
/// previous one even if the system clock is adjusted under us.
#[derive(Debug, Default)]
pub struct Clock {
    last: u64,
}

impl Clock {
    /// Current Unix timestamp in milliseconds, monotonically non-decreasing
    pub fn now_millis(&mut self) -> u64 {
        let wall = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last = self.last.max(wall);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_message_ids_unique_under_rapid_draws() {
        let ids = IdGenerator;
        let drawn: HashSet<String> = (0..1000).map(|_| ids.message_id()).collect();
        assert_eq!(drawn.len(), 1000);
    }

    #[test]
    fn test_agent_and_message_ids_share_no_namespace() {
        let ids = IdGenerator;
        assert!(ids.agent_id().starts_with("agent-"));
        assert!(ids.message_id().starts_with("msg-"));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut clock = Clock::default();
        let mut prev = 0;
        for _ in 0..1000 {
            let now = clock.now_millis();
            assert!(now >= prev);
            prev = now;
        }
    }
}
