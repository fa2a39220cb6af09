//! Need dimensions and the need catalog.
//!
//! # Model
//!
//! A need has a linear per-tick decay and a weighted cost curve centred on
//! [`COMFORT_LEVEL`]:
//!
//! ```text
//! decay(v) = v - rate
//! cost(v)  = weight * (v - COMFORT_LEVEL)    for v > 0
//!          = DEATH_COST                      for v <= 0
//! ```
//!
//! Higher cost is better, so an agent's reward is the plain sum of its
//! per-need costs and [`DEATH_COST`] is the smallest value `cost` can return.
//! Values are never clamped; satisfaction keeps falling below zero.

use soc_core::NeedId;

use crate::{BehaviorError, BehaviorResult};

/// Score returned by [`Need::cost`] for any satisfaction `<= 0`.
pub const DEATH_COST: f64 = -1e10;

/// Satisfaction at which a need neither helps nor hurts the reward.
pub const COMFORT_LEVEL: f64 = 50.0;

/// Satisfaction of a freshly created agent, and the value restoring actions
/// reset a need to.
pub const FULL_SATISFACTION: f64 = 100.0;

/// One need dimension.  Immutable once added to a [`NeedCatalog`].
#[derive(Clone, Debug, PartialEq)]
pub struct Need {
    pub id:         NeedId,
    pub name:       String,
    /// Satisfaction lost per tick.
    pub decay_rate: f64,
    /// Multiplier applied to the distance from [`COMFORT_LEVEL`].
    pub weight:     f64,
}

impl Need {
    /// Satisfaction after one tick of decay.
    #[inline]
    pub fn decay(&self, value: f64) -> f64 {
        value - self.decay_rate
    }

    /// Score of `value` on this need.  [`DEATH_COST`] for `value <= 0`.
    #[inline]
    pub fn cost(&self, value: f64) -> f64 {
        if value <= 0.0 {
            DEATH_COST
        } else {
            self.weight * (value - COMFORT_LEVEL)
        }
    }
}

// ── NeedCatalog ───────────────────────────────────────────────────────────────

/// The ordered set of needs every agent tracks.
///
/// Satisfaction vectors use the same indexing: `satisfaction[id.index()]`
/// is the agent's value for the need with `id`.
#[derive(Clone, Debug, Default)]
pub struct NeedCatalog {
    needs: Vec<Need>,
}

impl NeedCatalog {
    pub const FOOD:    NeedId = NeedId(0);
    pub const WATER:   NeedId = NeedId(1);
    pub const REST:    NeedId = NeedId(2);
    pub const HYGIENE: NeedId = NeedId(3);

    pub fn new() -> Self {
        Self::default()
    }

    /// Food, water, rest and hygiene, in that order (see the `FOOD` …
    /// `HYGIENE` constants).
    pub fn with_defaults() -> Self {
        let defaults = [
            ("food",    1.0, 2.0),
            ("water",   2.0, 4.0),
            ("rest",    1.0, 1.0),
            ("hygiene", 1.0, 0.5),
        ];
        let needs = defaults
            .into_iter()
            .enumerate()
            .map(|(i, (name, decay_rate, weight))| Need {
                id: NeedId(i as u16),
                name: name.to_owned(),
                decay_rate,
                weight,
            })
            .collect();
        Self { needs }
    }

    /// Append a need and return its id.
    ///
    /// # Errors
    ///
    /// Rejects duplicate names, a negative or non-finite `decay_rate`, and a
    /// non-finite `weight`.
    pub fn add(&mut self, name: &str, decay_rate: f64, weight: f64) -> BehaviorResult<NeedId> {
        if self.by_name(name).is_some() {
            return Err(BehaviorError::DuplicateName { kind: "need", name: name.to_owned() });
        }
        if !(decay_rate.is_finite() && decay_rate >= 0.0) {
            return Err(BehaviorError::Config(format!(
                "need {name:?}: decay rate must be finite and non-negative, got {decay_rate}"
            )));
        }
        if !weight.is_finite() {
            return Err(BehaviorError::Config(format!(
                "need {name:?}: weight must be finite, got {weight}"
            )));
        }
        let id = NeedId::try_from(self.needs.len())
            .ok()
            .filter(|id| *id != NeedId::INVALID)
            .ok_or(BehaviorError::CatalogFull(NeedId::INVALID.index()))?;
        self.needs.push(Need { id, name: name.to_owned(), decay_rate, weight });
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.needs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NeedId) -> Option<&Need> {
        self.needs.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Need> {
        self.needs.iter().find(|n| n.name == name)
    }

    /// Needs in catalog (= decay) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Need> {
        self.needs.iter()
    }

    /// A satisfaction vector with every need at [`FULL_SATISFACTION`].
    pub fn full_satisfaction(&self) -> Vec<f64> {
        vec![FULL_SATISFACTION; self.needs.len()]
    }

    /// Apply one tick of decay to every need, in catalog order.
    pub fn decay_all(&self, satisfaction: &mut [f64]) {
        for (need, value) in self.needs.iter().zip(satisfaction.iter_mut()) {
            *value = need.decay(*value);
        }
    }

    /// Sum of [`Need::cost`] over all needs.
    pub fn reward(&self, satisfaction: &[f64]) -> f64 {
        self.needs
            .iter()
            .zip(satisfaction)
            .map(|(need, &value)| need.cost(value))
            .sum()
    }
}

impl<'a> IntoIterator for &'a NeedCatalog {
    type Item = &'a Need;
    type IntoIter = std::slice::Iter<'a, Need>;

    fn into_iter(self) -> Self::IntoIter {
        self.needs.iter()
    }
}
