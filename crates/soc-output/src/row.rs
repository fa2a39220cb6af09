//! Plain data row types written by output backends.

/// One human's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:     u32,
    pub tick:         u64,
    pub x:            f64,
    pub y:            f64,
    /// `"idle"`, `"traveling"` or `"performing"`.
    pub phase:        &'static str,
    /// Name of the action being executed; empty when idle.
    pub action:       String,
    pub reward:       f64,
    /// One value per need, catalog order.
    pub satisfaction: Vec<f64>,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub started:           u64,
    pub arrivals:          u64,
    pub completed:         u64,
    pub busy_agents:       u64,
    pub distressed_agents: u64,
}
