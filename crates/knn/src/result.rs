//! Output types for nearest-neighbor queries.

use knnlab_dataset::Label;
use knnlab_project::ProjectedPoint;
use serde::Serialize;

/// Indices and distances of the k nearest rows of a flat matrix.
///
/// Both vectors are ordered by ascending distance, ties by row index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbors {
    indices: Vec<usize>,
    distances: Vec<f64>,
}

impl Neighbors {
    pub(crate) fn new(indices: Vec<usize>, distances: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), distances.len());
        Self { indices, distances }
    }

    /// Row indices of the neighbors, nearest first.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Euclidean distances of the neighbors, ascending.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Number of neighbors.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set is empty. Never true for a successful query.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Result of [`k_nearest`](crate::k_nearest): the voted label plus the
/// neighbors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborSet {
    /// Majority label of the members.
    pub label: Label,
    /// The k nearest input points, nearest first.
    pub members: Vec<ProjectedPoint>,
    /// Euclidean distance of each member from the query.
    pub distances: Vec<f64>,
}

impl NeighborSet {
    /// Number of members.
    pub fn k(&self) -> usize {
        self.members.len()
    }

    /// Dataset row indices of the members, nearest first.
    pub fn rows(&self) -> Vec<usize> {
        self.members.iter().map(|p| p.row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_accessors() {
        let n = Neighbors::new(vec![4, 1], vec![0.5, 1.5]);
        assert_eq!(n.indices(), &[4, 1]);
        assert_eq!(n.distances(), &[0.5, 1.5]);
        assert_eq!(n.len(), 2);
        assert!(!n.is_empty());
    }

    #[test]
    fn test_neighbor_set_rows() {
        let set = NeighborSet {
            label: 1,
            members: vec![
                ProjectedPoint {
                    x: 0.0,
                    y: 0.0,
                    label: 1,
                    row: 7,
                },
                ProjectedPoint {
                    x: 1.0,
                    y: 0.0,
                    label: 0,
                    row: 2,
                },
            ],
            distances: vec![0.0, 1.0],
        };
        assert_eq!(set.k(), 2);
        assert_eq!(set.rows(), vec![7, 2]);
    }
}
