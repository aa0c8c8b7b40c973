//! Output types for k-NN classification queries.

use crate::dataset::Label;

/// One selected neighbor: a dataset record index and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Record index in the underlying dataset.
    pub index: usize,
    /// Euclidean distance to the query.
    pub distance: f64,
}

impl Neighbor {
    /// Creates a new neighbor entry.
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }
}

/// Result of a k-NN classification query.
///
/// Holds the voted label and the neighbors it was voted from, sorted by
/// ascending distance (ties by ascending record index).
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    label: Label,
    neighbors: Vec<Neighbor>,
}

impl Classification {
    pub(crate) fn new(label: Label, neighbors: Vec<Neighbor>) -> Self {
        Self { label, neighbors }
    }

    /// Returns the voted label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the selected neighbors, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the dataset indices of the selected neighbors, nearest first.
    pub fn neighbor_indices(&self) -> Vec<usize> {
        self.neighbors.iter().map(|n| n.index).collect()
    }
}
