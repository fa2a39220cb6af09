//! Fluent builder for [`Human`]s.
//!
//! # Usage
//!
//! ```rust
//! use soc_agent::{HumanBuilder, Population};
//! use soc_behavior::NeedCatalog;
//! use soc_core::Point;
//!
//! let needs = NeedCatalog::with_defaults();
//! let mut population = Population::new();
//! population.add(HumanBuilder::new(Point::new(30.0, 20.0)), &needs).unwrap();
//! population
//!     .add(HumanBuilder::new(Point::new(50.0, 40.0)).satisfaction(vec![80.0; 4]), &needs)
//!     .unwrap();
//!
//! assert_eq!(population.len(), 2);
//! assert_eq!(population.humans()[0].satisfaction(), &[100.0; 4]);
//! ```

use soc_behavior::NeedCatalog;
use soc_core::{AgentId, Point};

use crate::{AgentError, AgentResult, Human};

/// Start position and optional initial satisfaction for one human.
///
/// Without an explicit satisfaction vector the human starts with every need
/// at full satisfaction.
#[derive(Clone, Debug)]
pub struct HumanBuilder {
    position:     Point,
    satisfaction: Option<Vec<f64>>,
}

impl HumanBuilder {
    pub fn new(position: Point) -> Self {
        Self { position, satisfaction: None }
    }

    /// Override the initial satisfaction vector (catalog order).
    pub fn satisfaction(mut self, values: Vec<f64>) -> Self {
        self.satisfaction = Some(values);
        self
    }

    /// Construct the human with `id`, checking it against `needs`.
    pub fn build(self, id: AgentId, needs: &NeedCatalog) -> AgentResult<Human> {
        let Point { x, y } = self.position;
        if !(x.is_finite() && y.is_finite()) {
            return Err(AgentError::NonFinitePosition { x, y });
        }
        let satisfaction = match self.satisfaction {
            Some(values) if values.len() != needs.len() => {
                return Err(AgentError::SatisfactionLength { expected: needs.len(), got: values.len() });
            }
            Some(values) => values,
            None => needs.full_satisfaction(),
        };
        Ok(Human {
            id,
            position: self.position,
            satisfaction,
            current: None,
        })
    }
}
