use tracing::debug;

use crate::core::error::{check_len, Result};
use crate::nn::{Layer, Nodes};

/// Element-wise layer without trainable edges: square, no bias.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationLayer {
    nodes: Nodes,
}

impl ActivationLayer {
    pub fn new(n_inputs: usize, name: &'static str) -> ActivationLayer {
        debug!(layer = name, n_inputs, "initialized activation layer");
        ActivationLayer {
            nodes: Nodes::new(n_inputs, n_inputs, false, name),
        }
    }

    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Nodes {
        &mut self.nodes
    }
}

/// Logistic activation `1 / (1 + e^-x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sigmoid {
    activation: ActivationLayer,
}

impl Sigmoid {
    pub fn new(n_inputs: usize) -> Sigmoid {
        Sigmoid {
            activation: ActivationLayer::new(n_inputs, "Sigmoid"),
        }
    }
}

/// Strictly inside `(0, 1)` only while `|x|` stays below about 17; past that
/// f32 rounds the result to exactly `0.0` or `1.0`.
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + f32::exp(-x))
}

impl Layer for Sigmoid {
    fn nodes(&self) -> &Nodes {
        self.activation.nodes()
    }

    fn nodes_mut(&mut self) -> &mut Nodes {
        self.activation.nodes_mut()
    }

    fn forward(&self) -> Vec<f32> {
        self.nodes().weights().iter().map(|x| sigmoid(*x)).collect()
    }

    fn backward(&mut self, _lr: f32, delta: &[f32]) -> Result<Vec<f32>> {
        check_len(self.n_outputs(), delta.len())?;

        let grad_input = self
            .forward()
            .into_iter()
            .zip(delta)
            .map(|(s, d)| s * d * (1.0 - s))
            .collect();
        Ok(grad_input)
    }

    fn get_edge_weights(&self) -> Vec<Vec<f32>> {
        Vec::new()
    }

    fn set_edge_weights(&mut self, _edge_weights: &[Vec<f32>]) -> Result<()> {
        Ok(())
    }
}
