//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv` — one column per need after the fixed columns
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use soc_behavior::NeedCatalog;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputError, OutputResult, TickSummaryRow};

const SNAPSHOT_COLUMNS: [&str; 7] = ["agent_id", "tick", "x", "y", "phase", "action", "reward"];
const SUMMARY_COLUMNS: [&str; 6] = ["tick", "started", "arrivals", "completed", "busy_agents", "distressed_agents"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    need_count: usize,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    ///
    /// The snapshot header ends with one column per need in `needs`, named
    /// after the need.
    pub fn new(dir: &Path, needs: &NeedCatalog) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        let header = SNAPSHOT_COLUMNS
            .iter()
            .copied()
            .chain(needs.iter().map(|n| n.name.as_str()));
        snapshots.write_record(header)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_COLUMNS)?;

        Ok(Self {
            snapshots,
            summaries,
            need_count: needs.len(),
            finished:   false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            if row.satisfaction.len() != self.need_count {
                return Err(OutputError::RowWidth {
                    expected: self.need_count,
                    got:      row.satisfaction.len(),
                });
            }
            let mut record = vec![
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.phase.to_owned(),
                row.action.clone(),
                row.reward.to_string(),
            ];
            record.extend(row.satisfaction.iter().map(f64::to_string));
            self.snapshots.write_record(&record)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.started.to_string(),
            row.arrivals.to_string(),
            row.completed.to_string(),
            row.busy_agents.to_string(),
            row.distressed_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
