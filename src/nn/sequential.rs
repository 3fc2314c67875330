use tracing::{debug, trace};

use crate::core::error::{check_len, NetError, Result};
use crate::nn::loss::LossFunction;
use crate::nn::Layer;

/// An ordered chain of layers trained one sample at a time.
///
/// [`Sequential::forward`] leaves each layer holding its input, which
/// [`Sequential::backward`] then consumes, so the two must be called as a pair
/// on the same sample.
#[derive(Default)]
pub struct Sequential {
    layers: Vec<Box<dyn Layer + Send>>,
}

impl Sequential {
    pub fn new() -> Sequential {
        Sequential { layers: Vec::new() }
    }

    /// Appends a layer. Shapes of neighbouring layers are not compared here;
    /// a mismatch surfaces on the next forward pass.
    pub fn add_layer<L: Layer + Send + 'static>(&mut self, layer: L) {
        debug!(
            index = self.layers.len(),
            layer = layer.name(),
            n_inputs = layer.n_inputs(),
            n_outputs = layer.n_outputs(),
            "added layer"
        );
        self.layers.push(Box::new(layer));
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Box<dyn Layer + Send>] {
        &self.layers
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut (dyn Layer + Send + 'static)> {
        self.layers.get_mut(index).map(|layer| &mut **layer)
    }

    /// Runs `x` through every layer. Neighbouring shapes are checked before any
    /// layer input is written, so a failed call leaves the network untouched.
    pub fn forward(&mut self, x: &[f32]) -> Result<Vec<f32>> {
        let first = self.layers.first().ok_or(NetError::NoLayers)?;
        check_len(first.n_inputs(), x.len())?;
        for pair in self.layers.windows(2) {
            check_len(pair[1].n_inputs(), pair[0].n_outputs())?;
        }

        let mut current = x.to_vec();
        for (index, layer) in self.layers.iter_mut().enumerate() {
            layer.set_node_weights(&current)?;
            current = layer.forward();
            trace!(index, layer = layer.name(), "forward");
        }

        Ok(current)
    }

    pub fn backward(&mut self, loss_fn: &dyn LossFunction, lr: f32) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetError::NoLayers);
        }

        let mut delta = loss_fn.backward();
        for (index, layer) in self.layers.iter_mut().enumerate().rev() {
            delta = layer.backward(lr, &delta)?;
            trace!(index, layer = layer.name(), "backward");
        }

        Ok(())
    }

    pub fn summary(&self) -> String {
        self.layers.iter().map(|layer| layer.summary()).collect()
    }

    pub fn display(&self) {
        for layer in &self.layers {
            layer.display();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::activation::Sigmoid;
    use crate::nn::linear::Linear;
    use crate::nn::loss::MSELoss;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_layer() -> Sequential {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seq = Sequential::new();
        seq.add_layer(Linear::new(2, 1, false, &mut rng));
        seq.add_layer(Sigmoid::new(1));
        seq
    }

    #[test]
    fn forward_stores_each_layer_input() {
        let mut seq = two_layer();
        let out = seq.forward(&[0.5, 0.5]).unwrap();

        assert_eq!(out.len(), 1);
        assert!(out[0] > 0.0 && out[0] < 1.0);
        assert_eq!(seq.layers()[0].get_node_weights(), vec![0.5, 0.5]);
        assert_eq!(
            seq.layers()[1].get_node_weights(),
            seq.layers()[0].forward()
        );
    }

    #[test]
    fn backward_updates_dense_parameters() {
        let mut seq = two_layer();
        let before = seq.layers()[0].get_edge_weights();

        let yhat = seq.forward(&[0.5, 0.5]).unwrap();
        let loss_fn = MSELoss::new(&[1.0], &yhat).unwrap();
        seq.backward(&loss_fn, 0.1).unwrap();

        assert_ne!(seq.layers()[0].get_edge_weights(), before);
        assert!(seq.layers()[1].get_edge_weights().is_empty());
    }

    #[test]
    fn forward_rejects_wrong_input_length() {
        let mut seq = two_layer();
        assert_eq!(
            seq.forward(&[1.0, 2.0, 3.0]),
            Err(NetError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn incompatible_neighbours_fail_on_forward() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seq = Sequential::new();
        seq.add_layer(Linear::new(2, 3, false, &mut rng));
        seq.add_layer(Sigmoid::new(2));
        assert_eq!(seq.len(), 2);

        assert_eq!(
            seq.forward(&[1.0, 1.0]),
            Err(NetError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn failed_forward_leaves_every_layer_input_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seq = Sequential::new();
        seq.add_layer(Linear::new(2, 3, false, &mut rng));
        seq.add_layer(Sigmoid::new(2));

        assert!(seq.forward(&[7.0, 8.0]).is_err());
        assert_eq!(seq.layers()[0].get_node_weights(), vec![0.0, 0.0]);
        assert_eq!(seq.layers()[1].get_node_weights(), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_network_reports_no_layers() {
        let mut seq = Sequential::new();
        assert!(seq.is_empty());
        assert_eq!(seq.forward(&[1.0]), Err(NetError::NoLayers));

        let loss_fn = MSELoss::new(&[1.0], &[0.0]).unwrap();
        assert_eq!(seq.backward(&loss_fn, 0.1), Err(NetError::NoLayers));
    }

    #[test]
    fn wrong_target_length_fails_before_any_update() {
        let mut seq = two_layer();
        seq.forward(&[0.5, 0.5]).unwrap();
        let before = seq.layers()[0].get_edge_weights();

        let loss_fn = MSELoss::new(&[1.0, 0.0], &[0.5, 0.5]).unwrap();
        assert!(seq.backward(&loss_fn, 0.1).is_err());
        assert_eq!(seq.layers()[0].get_edge_weights(), before);
    }

    #[test]
    fn summary_concatenates_layers_in_order() {
        let seq = two_layer();
        let summary = seq.summary();
        let linear_at = summary.find("Linear (2,1)").unwrap();
        let sigmoid_at = summary.find("Sigmoid (1,1)").unwrap();
        assert!(linear_at < sigmoid_at);
        assert_eq!(summary.matches("Edge").count(), 2);
        assert_eq!(summary.matches("Activation").count(), 1);
    }

    #[test]
    fn layer_mut_allows_setting_weights() {
        let mut seq = two_layer();
        seq.layer_mut(0)
            .unwrap()
            .set_edge_weights(&[vec![0.0], vec![0.0]])
            .unwrap();
        let out = seq.forward(&[3.0, -2.0]).unwrap();
        assert_eq!(out, vec![0.5]);
        assert!(seq.layer_mut(5).is_none());
    }
}
