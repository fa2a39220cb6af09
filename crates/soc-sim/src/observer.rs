//! Simulation observer trait for progress reporting and data collection.

use soc_agent::Human;
use soc_behavior::{ActionCatalog, NeedCatalog};
use soc_core::Tick;
use soc_spatial::Geography;

use crate::TickSummary;

/// Read-only world state passed to [`SimObserver::on_snapshot`].
///
/// Reflects the state after the last completed tick.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    pub tick:      Tick,
    pub humans:    &'a [Human],
    pub needs:     &'a NeedCatalog,
    pub actions:   &'a ActionCatalog,
    pub geography: &'a Geography,
}

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} busy", summary.tick, summary.busy);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each tick, with the tick about to be simulated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with its aggregate counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks).
    fn on_snapshot(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
