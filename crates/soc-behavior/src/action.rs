//! Actions and the action catalog.
//!
//! An action names the needs it affects, where the agent has to be to
//! perform it, how long performing takes, and how the affected satisfaction
//! values change on completion.  Nothing changes before completion.

use soc_core::{ActionId, NeedId, Point};
use soc_spatial::ResourceKind;

use crate::{ActionContext, AgentView, BehaviorError, BehaviorResult, NeedCatalog, FULL_SATISFACTION};

// ── Destination ───────────────────────────────────────────────────────────────

/// Where an agent must walk before performing an action.
///
/// Resolved once, when the action starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Destination {
    /// Perform in place.
    Here,
    /// The closest point of the nearest resource of this kind.  Falls back to
    /// the agent's own position when the world has none.
    Nearest(ResourceKind),
    /// A fixed world position.
    Fixed(Point),
}

impl Destination {
    pub fn resolve(&self, agent: &AgentView<'_>, ctx: &ActionContext<'_>) -> Point {
        match *self {
            Destination::Here => agent.position,
            Destination::Nearest(kind) => ctx
                .geography
                .approach_point(kind, agent.position)
                .unwrap_or(agent.position),
            Destination::Fixed(p) => p,
        }
    }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// How an affected satisfaction value changes when the action completes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Set the value outright.
    Restore(f64),
    /// Add `amount`, but never past `cap`.  A value already above `cap` is
    /// left alone.
    Replenish { amount: f64, cap: f64 },
}

impl Transform {
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Restore(v) => v,
            Transform::Replenish { amount, cap } => {
                if value >= cap { value } else { (value + amount).min(cap) }
            }
        }
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// One thing an agent can do.  Immutable once added to an [`ActionCatalog`].
///
/// Build with the chained setters, starting from [`Action::new`]:
///
/// ```
/// use soc_behavior::{Action, Destination, NeedCatalog, Transform};
/// use soc_spatial::ResourceKind;
///
/// let drink = Action::new("drink")
///     .affects(NeedCatalog::WATER)
///     .transform(Transform::Restore(100.0))
///     .duration(3)
///     .destination(Destination::Nearest(ResourceKind::Lake));
/// assert_eq!(drink.predict(&[80.0, 10.0, 70.0, 60.0]), vec![80.0, 100.0, 70.0, 60.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    /// Assigned by [`ActionCatalog::add`]; `INVALID` until then.
    pub id:             ActionId,
    pub name:           String,
    pub affects:        Vec<NeedId>,
    pub transform:      Transform,
    /// Ticks spent performing once at the destination.
    pub duration_ticks: u64,
    pub destination:    Destination,
}

impl Action {
    /// An action that affects nothing, takes one tick, and is performed in
    /// place.
    pub fn new(name: &str) -> Self {
        Self {
            id:             ActionId::INVALID,
            name:           name.to_owned(),
            affects:        Vec::new(),
            transform:      Transform::Restore(FULL_SATISFACTION),
            duration_ticks: 1,
            destination:    Destination::Here,
        }
    }

    pub fn affects(mut self, need: NeedId) -> Self {
        self.affects.push(need);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn duration(mut self, ticks: u64) -> Self {
        self.duration_ticks = ticks;
        self
    }

    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Where `agent` should perform this action.
    pub fn resolve_destination(&self, agent: &AgentView<'_>, ctx: &ActionContext<'_>) -> Point {
        self.destination.resolve(agent, ctx)
    }

    /// How many ticks `agent` will spend performing this action.
    pub fn resolve_duration(&self, _agent: &AgentView<'_>, _ctx: &ActionContext<'_>) -> u64 {
        self.duration_ticks
    }

    /// Apply the completion transform to the affected needs only.
    ///
    /// Indices outside `satisfaction` are ignored; catalogs are validated so
    /// that never happens inside a world.
    pub fn complete(&self, satisfaction: &mut [f64]) {
        for need in &self.affects {
            if let Some(value) = satisfaction.get_mut(need.index()) {
                *value = self.transform.apply(*value);
            }
        }
    }

    /// The satisfaction vector completing this action would produce.
    pub fn predict(&self, satisfaction: &[f64]) -> Vec<f64> {
        let mut out = satisfaction.to_vec();
        self.complete(&mut out);
        out
    }
}

// ── ActionCatalog ─────────────────────────────────────────────────────────────

/// The set of actions available to every agent.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    pub const EAT:     ActionId = ActionId(0);
    pub const DRINK:   ActionId = ActionId(1);
    pub const SLEEP:   ActionId = ActionId(2);
    pub const RELIEVE: ActionId = ActionId(3);

    pub fn new() -> Self {
        Self::default()
    }

    /// Eat, drink, sleep and relieve, each restoring one default need to
    /// full over three ticks.  Pairs with [`NeedCatalog::with_defaults`].
    pub fn with_defaults() -> Self {
        use ResourceKind::{Forest, Lake};

        let defaults = [
            ("eat",     NeedCatalog::FOOD,    Destination::Nearest(Forest)),
            ("drink",   NeedCatalog::WATER,   Destination::Nearest(Lake)),
            ("sleep",   NeedCatalog::REST,    Destination::Here),
            ("relieve", NeedCatalog::HYGIENE, Destination::Nearest(Forest)),
        ];
        let actions = defaults
            .into_iter()
            .enumerate()
            .map(|(i, (name, need, destination))| Action {
                id: ActionId(i as u16),
                ..Action::new(name)
                    .affects(need)
                    .transform(Transform::Restore(FULL_SATISFACTION))
                    .duration(3)
                    .destination(destination)
            })
            .collect();
        Self { actions }
    }

    /// Append `action`, assign its id, and return the id.
    pub fn add(&mut self, mut action: Action) -> BehaviorResult<ActionId> {
        if self.by_name(&action.name).is_some() {
            return Err(BehaviorError::DuplicateName { kind: "action", name: action.name });
        }
        let id = ActionId::try_from(self.actions.len())
            .ok()
            .filter(|id| *id != ActionId::INVALID)
            .ok_or(BehaviorError::CatalogFull(ActionId::INVALID.index()))?;
        action.id = id;
        self.actions.push(action);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Check that every affected need exists in `needs`.
    pub fn validate(&self, needs: &NeedCatalog) -> BehaviorResult<()> {
        for action in &self.actions {
            if let Some(&need) = action.affects.iter().find(|n| needs.get(**n).is_none()) {
                return Err(BehaviorError::UnknownNeed { action: action.id, need });
            }
        }
        Ok(())
    }
}
