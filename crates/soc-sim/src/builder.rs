//! Fluent builder for constructing a [`World`].

use soc_agent::{HumanBuilder, Population};
use soc_behavior::{ActionCatalog, BehaviorModel, NeedCatalog, NoopBehavior};
use soc_core::{SimClock, SimConfig};
use soc_mobility::MobilityEngine;
use soc_spatial::Geography;
use tracing::info;

use crate::{SimError, SimResult, World};

/// Fluent builder for [`World<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, walking speed, arrival epsilon, …
/// - [`Geography`] — forests and lakes, from
///   [`soc_spatial::GeographyBuilder`] or the CSV loader
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                            |
/// |------------------|------------------------------------|
/// | `.needs(c)`      | `NeedCatalog::with_defaults()`     |
/// | `.actions(c)`    | `ActionCatalog::with_defaults()`   |
/// | `.human(h)`      | no humans                          |
/// | `.behavior(b)`   | `NoopBehavior`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, geography)
///     .humans(starts.into_iter().map(HumanBuilder::new))
///     .behavior(Rotation::default())
///     .build()?;
/// world.run(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder<B: BehaviorModel = NoopBehavior> {
    config:    SimConfig,
    geography: Geography,
    needs:     NeedCatalog,
    actions:   ActionCatalog,
    humans:    Vec<HumanBuilder>,
    behavior:  B,
}

impl WorldBuilder<NoopBehavior> {
    /// Create a builder with the required inputs and default catalogs.
    pub fn new(config: SimConfig, geography: Geography) -> Self {
        Self {
            config,
            geography,
            needs:    NeedCatalog::with_defaults(),
            actions:  ActionCatalog::with_defaults(),
            humans:   Vec::new(),
            behavior: NoopBehavior,
        }
    }
}

impl<B: BehaviorModel> WorldBuilder<B> {
    /// Replace the need catalog.  Actions must only refer to needs in it.
    pub fn needs(mut self, needs: NeedCatalog) -> Self {
        self.needs = needs;
        self
    }

    /// Replace the action catalog.
    pub fn actions(mut self, actions: ActionCatalog) -> Self {
        self.actions = actions;
        self
    }

    /// Add one human.  Ids are assigned in the order humans are added.
    pub fn human(mut self, human: HumanBuilder) -> Self {
        self.humans.push(human);
        self
    }

    /// Add several humans.
    pub fn humans(mut self, humans: impl IntoIterator<Item = HumanBuilder>) -> Self {
        self.humans.extend(humans);
        self
    }

    /// Swap in a behavior model that chooses actions for idle humans.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> WorldBuilder<B2> {
        WorldBuilder {
            config:    self.config,
            geography: self.geography,
            needs:     self.needs,
            actions:   self.actions,
            humans:    self.humans,
            behavior,
        }
    }

    /// Validate every input and return a world at tick 0.
    pub fn build(self) -> SimResult<World<B>> {
        self.config.validate()?;
        if self.geography.size() != self.config.world_size {
            return Err(SimError::Config(format!(
                "geography size {} does not match config world_size {}",
                self.geography.size(),
                self.config.world_size
            )));
        }
        self.actions.validate(&self.needs)?;
        let mobility = MobilityEngine::from_config(&self.config)?;

        let mut population = Population::new();
        for human in self.humans {
            population.add(human, &self.needs)?;
        }

        info!(
            humans = population.len(),
            needs = self.needs.len(),
            actions = self.actions.len(),
            forests = self.geography.forests().len(),
            lakes = self.geography.lakes().len(),
            total_ticks = self.config.total_ticks,
            "world built"
        );

        Ok(World {
            distress_reported: vec![false; population.len()],
            clock:             SimClock::new(),
            config:            self.config,
            geography:         self.geography,
            needs:             self.needs,
            actions:           self.actions,
            mobility,
            population,
            behavior:          self.behavior,
        })
    }
}
