//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use soc_agent::Human;
use soc_core::Tick;
use soc_sim::{SimObserver, Snapshot, TickSummary};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `world.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn snapshot_row(human: &Human, snapshot: &Snapshot<'_>) -> AgentSnapshotRow {
    let position = human.position();
    let (phase, action) = match human.current() {
        None => ("idle", String::new()),
        Some(exec) => (
            exec.phase.as_str(),
            snapshot
                .actions
                .get(exec.action)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| exec.action.to_string()),
        ),
    };
    AgentSnapshotRow {
        agent_id:     human.id().0,
        tick:         snapshot.tick.0,
        x:            position.x,
        y:            position.y,
        phase,
        action,
        reward:       human.reward(snapshot.needs),
        satisfaction: human.satisfaction().to_vec(),
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:              summary.tick.0,
            started:           summary.started as u64,
            arrivals:          summary.arrivals as u64,
            completed:         summary.completed as u64,
            busy_agents:       summary.busy as u64,
            distressed_agents: summary.distressed as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        let rows: Vec<AgentSnapshotRow> = snapshot
            .humans
            .iter()
            .map(|h| snapshot_row(h, snapshot))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
