use serde::{Deserialize, Serialize};

/// Availability shown next to an agent in the sidebar.
///
/// Set once at creation (new agents always start online); seed data may
/// start agents in other states. No operation transitions between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Busy,
    Offline,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Online => "online",
            AgentStatus::Busy => "busy",
            AgentStatus::Offline => "offline",
        }
    }
}

/// What kind of work an agent is presented as doing. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Research,
    Analysis,
    Creative,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Research, AgentKind::Analysis, AgentKind::Creative];

    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Research => "research",
            AgentKind::Analysis => "analysis",
            AgentKind::Creative => "creative",
        }
    }

    /// Get the next kind (wraps around)
    pub fn next(self) -> Self {
        match self {
            AgentKind::Research => AgentKind::Analysis,
            AgentKind::Analysis => AgentKind::Creative,
            AgentKind::Creative => AgentKind::Research,
        }
    }

    /// Get the previous kind (wraps around)
    pub fn prev(self) -> Self {
        match self {
            AgentKind::Research => AgentKind::Creative,
            AgentKind::Analysis => AgentKind::Research,
            AgentKind::Creative => AgentKind::Analysis,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub kind: AgentKind,
    /// Unix millis; set at creation and never updated afterwards
    pub last_active: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_cycle_wraps_both_ways() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.next().prev(), kind);
            assert_eq!(kind.prev().next(), kind);
        }
        assert_eq!(AgentKind::Creative.next(), AgentKind::Research);
        assert_eq!(AgentKind::Research.prev(), AgentKind::Creative);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AgentStatus::Busy).unwrap();
        assert_eq!(json, "\"busy\"");
        let back: AgentStatus = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(back, AgentStatus::Offline);
    }
}
