//! Solution types shared by the colony components.

/// A complete visiting order together with its total weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Node indices in visiting order; a permutation of `0..N`.
    pub path: Vec<usize>,

    /// Sum of edge weights between consecutive nodes.
    pub length: f64,
}

impl Tour {
    /// Edges traversed by the tour, in order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let tour = Tour {
            path: vec![3, 0, 2],
            length: 7.0,
        };
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(3, 0), (0, 2)]);
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let tour = Tour {
            path: vec![1],
            length: 0.0,
        };
        assert_eq!(tour.edges().count(), 0);
    }
}
