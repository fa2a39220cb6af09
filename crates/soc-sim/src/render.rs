//! Contiguous per-tick buffers for renderers.

use soc_agent::Human;

/// Positions and satisfaction of every human, copied out of the world.
///
/// Humans own their state; the world copies it here on request so that a
/// renderer can hold the buffer across ticks without borrowing the world.
/// Reuse one buffer for the whole run to avoid per-tick allocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderBuffer {
    /// `[x, y]` per human, construction order.
    pub positions:    Vec<[f64; 2]>,
    /// Row-major satisfaction matrix: `need_count` values per human.
    pub satisfaction: Vec<f64>,
    pub need_count:   usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fill(&mut self, humans: &[Human], need_count: usize) {
        self.need_count = need_count;
        self.positions.clear();
        self.satisfaction.clear();
        for human in humans {
            self.positions.push(human.position().to_array());
            self.satisfaction.extend_from_slice(human.satisfaction());
        }
    }

    /// Number of humans in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Satisfaction row of the `i`-th human.
    pub fn satisfaction_of(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.need_count)?;
        self.satisfaction.get(start..start + self.need_count)
    }
}
