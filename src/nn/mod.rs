use crate::core::error::{check_len, Result};

pub mod activation;
pub mod dense;
pub mod linear;
pub mod loss;
pub mod sequential;

/// Per-node state shared by every layer kind.
///
/// `weights` holds the most recent input fed to the layer (plus the unit
/// bias node when `inc_bias` is set), not trainable parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Nodes {
    n_inputs: usize,
    n_outputs: usize,
    inc_bias: bool,
    name: &'static str,
    weights: Vec<f32>,
}

impl Nodes {
    pub fn new(n_inputs: usize, n_outputs: usize, inc_bias: bool, name: &'static str) -> Nodes {
        let mut weights = vec![0.0; n_inputs + usize::from(inc_bias)];
        if inc_bias {
            weights[n_inputs] = 1.0;
        }
        Nodes {
            n_inputs,
            n_outputs,
            inc_bias,
            name,
            weights,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    pub fn inc_bias(&self) -> bool {
        self.inc_bias
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of input slots, counting the bias node.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Overwrites the real inputs; the bias node keeps its unit value.
    pub fn set(&mut self, values: &[f32]) -> Result<()> {
        check_len(self.n_inputs, values.len())?;
        self.weights[..self.n_inputs].copy_from_slice(values);
        Ok(())
    }
}

/// A computational unit in a [`sequential::Sequential`] network.
///
/// Inputs are pushed with [`Layer::set_node_weights`] and consumed by
/// [`Layer::forward`]; [`Layer::backward`] reads the same stored input, so a
/// forward pass on the matching input must precede it.
pub trait Layer {
    fn nodes(&self) -> &Nodes;
    fn nodes_mut(&mut self) -> &mut Nodes;

    fn forward(&self) -> Vec<f32>;

    /// Applies the parameter update for `delta` and returns the error for the
    /// previous layer.
    fn backward(&mut self, lr: f32, delta: &[f32]) -> Result<Vec<f32>>;

    fn get_edge_weights(&self) -> Vec<Vec<f32>>;
    fn set_edge_weights(&mut self, edge_weights: &[Vec<f32>]) -> Result<()>;

    fn n_inputs(&self) -> usize {
        self.nodes().n_inputs()
    }

    fn n_outputs(&self) -> usize {
        self.nodes().n_outputs()
    }

    fn name(&self) -> &str {
        self.nodes().name()
    }

    fn set_node_weights(&mut self, node_weights: &[f32]) -> Result<()> {
        self.nodes_mut().set(node_weights)
    }

    fn get_node_weights(&self) -> Vec<f32> {
        self.nodes().weights().to_vec()
    }

    fn summary(&self) -> String {
        let mut out = format!("{} ({},{})\n", self.name(), self.n_inputs(), self.n_outputs());
        let edges = self.get_edge_weights();
        if edges.is_empty() {
            out.push_str("  Activation\n");
            return out;
        }
        for (i, row) in edges.iter().enumerate() {
            for (j, w) in row.iter().enumerate() {
                out.push_str(&format!("  Edge ({},{}): {}\n", i, j, w));
            }
        }
        out
    }

    fn display(&self) {
        print!("{}", self.summary());
    }
}
