//! Build orders: an ordered, user-assembled sequence of catalog items
//!
//! Steps borrow their items from a [`Game`](crate::catalog::Game), so a build
//! order can never outlive the catalog it was assembled from. Step numbers are
//! derived from position and are rewritten after every structural change.
//!
//! Both types serialize; a step writes its item as the item's id.

use serde::{Serialize, Serializer};

use crate::models::GameItem;

fn serialize_item_id<S: Serializer>(item: &&GameItem, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&item.id)
}

/// One entry in a build order
#[derive(Debug, Clone, Serialize)]
pub struct BuildOrderStep<'g> {
    #[serde(serialize_with = "serialize_item_id")]
    item: &'g GameItem,
    step_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl<'g> BuildOrderStep<'g> {
    fn new(step_number: usize, item: &'g GameItem) -> Self {
        Self {
            item,
            step_number,
            notes: None,
        }
    }

    pub fn item(&self) -> &'g GameItem {
        self.item
    }

    /// 1-based position in the owning build order
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A named sequence of steps
///
/// Invariant: `steps()[i].step_number() == i + 1` whenever control is back in
/// the caller's hands. Out-of-range indices are ignored rather than reported;
/// the index operations return `false` when they did nothing.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOrder<'g> {
    name: String,
    steps: Vec<BuildOrderStep<'g>>,
}

impl<'g> BuildOrder<'g> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn steps(&self) -> &[BuildOrderStep<'g>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step for `item`. The same item may be added any number of times.
    pub fn add_step(&mut self, item: &'g GameItem) {
        let step_number = self.steps.len() + 1;
        self.steps.push(BuildOrderStep::new(step_number, item));
    }

    pub fn add_step_with_notes(&mut self, item: &'g GameItem, notes: impl Into<String>) {
        self.add_step(item);
        if let Some(step) = self.steps.last_mut() {
            step.notes = Some(notes.into());
        }
    }

    /// Remove the step at `index` and renumber. No-op if out of range.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            tracing::debug!(index, len = self.steps.len(), "remove_step ignored: index out of range");
            return false;
        }
        self.steps.remove(index);
        self.renumber_steps();
        true
    }

    /// Move the step at `from` so it ends up at `to`.
    ///
    /// The step is taken out first and `to` indexes the shortened sequence,
    /// so on `[A, B, C, D]` a move from 0 to 2 gives `[B, C, A, D]`. No-op if
    /// either index is out of range or they are equal.
    pub fn move_step(&mut self, from: usize, to: usize) -> bool {
        let len = self.steps.len();
        if from >= len || to >= len || from == to {
            tracing::debug!(from, to, len, "move_step ignored");
            return false;
        }
        let step = self.steps.remove(from);
        self.steps.insert(to, step);
        self.renumber_steps();
        true
    }

    /// Replace the notes on the step at `index`. No-op if out of range.
    pub fn set_notes(&mut self, index: usize, notes: impl Into<String>) -> bool {
        match self.steps.get_mut(index) {
            Some(step) => {
                step.notes = Some(notes.into());
                true
            }
            None => {
                tracing::debug!(index, "set_notes ignored: index out of range");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Sum of the build times of every step, in seconds
    pub fn total_build_time(&self) -> f64 {
        self.steps.iter().map(|step| step.item.build_time_s).sum()
    }

    fn renumber_steps(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.step_number = i + 1;
        }
    }
}
