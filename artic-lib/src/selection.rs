//! The page-independent set of selected artwork identifiers.

use std::collections::HashSet;

use crate::model::ArtworkId;
use crate::model::ArtworkRow;

/// Selected identifiers, deduplicated, in the order they were first added.
///
/// Selection is keyed by identifier rather than by row, so it survives the
/// rows of a page being fetched again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIds {
    order: Vec<ArtworkId>,
    set: HashSet<ArtworkId>,
}

impl SelectedIds {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds identifiers, skipping ones already selected.
    ///
    /// Returns the number of identifiers that were newly added. Never
    /// removes anything.
    pub fn union(&mut self, ids: impl IntoIterator<Item = ArtworkId>) -> usize {
        let before = self.order.len();
        for id in ids {
            if self.set.insert(id) {
                self.order.push(id);
            }
        }
        self.order.len() - before
    }

    /// Replaces the whole selection.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.clear();
        self.union(ids);
    }

    /// Check if an identifier is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.set.contains(&id)
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.order.clear();
        self.set.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.order.iter().copied()
    }

    /// Rows of `rows` whose identifier is selected, in page order.
    pub fn visible<'a>(&self, rows: &'a [ArtworkRow]) -> Vec<&'a ArtworkRow> {
        rows.iter()
            .filter(|row| row.id.is_some_and(|id| self.contains(id)))
            .collect()
    }
}

impl FromIterator<ArtworkId> for SelectedIds {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        let mut selected = Self::new();
        selected.union(iter);
        selected
    }
}
