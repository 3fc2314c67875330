use rand::Rng;
use tracing::debug;

use crate::core::error::{check_len, Result};
use crate::core::matrix::Matrix;
use crate::nn::Nodes;

/// Fully-connected layer state: node state plus an
/// `(n_inputs + bias) x n_outputs` edge matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    nodes: Nodes,
    edges: Matrix,
}

impl DenseLayer {
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        inc_bias: bool,
        name: &'static str,
        rng: &mut R,
    ) -> DenseLayer {
        let nodes = Nodes::new(n_inputs, n_outputs, inc_bias, name);
        let mut edges = Matrix::new(nodes.len(), n_outputs, 0.0);
        edges.randomize(rng);
        debug!(layer = name, n_inputs, n_outputs, inc_bias, "initialized dense layer");

        DenseLayer { nodes, edges }
    }

    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Nodes {
        &mut self.nodes
    }

    pub fn edges(&self) -> &Matrix {
        &self.edges
    }

    /// Splits the borrow so an update loop can read inputs while writing edges.
    pub fn split_mut(&mut self) -> (&Nodes, &mut Matrix) {
        (&self.nodes, &mut self.edges)
    }

    pub fn edge_rows(&self) -> Vec<Vec<f32>> {
        self.edges.to_rows()
    }

    /// Replaces the edge matrix. The whole shape is checked before anything
    /// is written.
    pub fn set_edge_rows(&mut self, rows: &[Vec<f32>]) -> Result<()> {
        check_len(self.edges.rows, rows.len())?;
        self.edges = Matrix::from_rows(rows, self.edges.cols)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NetError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layer(inc_bias: bool) -> DenseLayer {
        DenseLayer::new(3, 2, inc_bias, "Dense", &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn edge_shape_counts_bias_row() {
        assert_eq!(layer(false).edges().rows, 3);
        assert_eq!(layer(true).edges().rows, 4);
        assert_eq!(layer(true).edges().cols, 2);
    }

    #[test]
    fn failed_set_leaves_edges_untouched() {
        let mut dense = layer(false);
        let before = dense.edge_rows();

        let short = vec![vec![0.0, 0.0]; 2];
        assert_eq!(
            dense.set_edge_rows(&short),
            Err(NetError::ShapeMismatch {
                expected: 3,
                actual: 2
            })
        );

        let ragged = vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0]];
        assert!(dense.set_edge_rows(&ragged).is_err());
        assert_eq!(dense.edge_rows(), before);
    }

    #[test]
    fn set_overwrites_every_entry() {
        let mut dense = layer(false);
        let rows = vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]];
        dense.set_edge_rows(&rows).unwrap();
        assert_eq!(dense.edge_rows(), rows);
    }
}
