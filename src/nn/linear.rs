use rand::Rng;
use tracing::trace;

use crate::core::error::{check_len, Result};
use crate::nn::dense::DenseLayer;
use crate::nn::{Layer, Nodes};

/// Affine transform `out = x . W`, with the bias folded in as a unit input
/// row when `inc_bias` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    dense: DenseLayer,
}

impl Linear {
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        inc_bias: bool,
        rng: &mut R,
    ) -> Linear {
        Linear {
            dense: DenseLayer::new(n_inputs, n_outputs, inc_bias, "Linear", rng),
        }
    }
}

impl Layer for Linear {
    fn nodes(&self) -> &Nodes {
        self.dense.nodes()
    }

    fn nodes_mut(&mut self) -> &mut Nodes {
        self.dense.nodes_mut()
    }

    fn forward(&self) -> Vec<f32> {
        let edges = self.dense.edges();
        let mut res = vec![0.0; edges.cols];
        for (j, x) in self.nodes().weights().iter().enumerate() {
            res.iter_mut()
                .zip(edges.row(j))
                .for_each(|(out, w)| *out += x * w);
        }
        res
    }

    fn backward(&mut self, lr: f32, delta: &[f32]) -> Result<Vec<f32>> {
        check_len(self.n_outputs(), delta.len())?;

        let (nodes, edges) = self.dense.split_mut();
        let n_inputs = nodes.n_inputs();
        let mut grad_input = Vec::with_capacity(n_inputs);

        for (i, x) in nodes.weights().iter().enumerate() {
            let mut tmp = 0.0;
            // Each weight is read for propagation before its own update.
            for (w, d) in edges.row_mut(i).iter_mut().zip(delta) {
                tmp += d * *w;
                *w -= lr * d * x;
            }
            // The bias row is trained but has no upstream node to receive error.
            if i < n_inputs {
                grad_input.push(tmp);
            }
        }

        trace!(n_inputs, n_outputs = delta.len(), lr, "linear backward");
        Ok(grad_input)
    }

    fn get_edge_weights(&self) -> Vec<Vec<f32>> {
        self.dense.edge_rows()
    }

    fn set_edge_weights(&mut self, edge_weights: &[Vec<f32>]) -> Result<()> {
        self.dense.set_edge_rows(edge_weights)
    }
}
