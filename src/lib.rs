//! A minimal feed-forward neural network training engine.
//!
//! Layers hold the last input they were given, [`Sequential`] chains them, and
//! a [`LossFunction`] built from each prediction seeds backpropagation:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seqnet::{Linear, LossFunction, MSELoss, Sequential, Sigmoid};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut seq = Sequential::new();
//! seq.add_layer(Linear::new(2, 1, false, &mut rng));
//! seq.add_layer(Sigmoid::new(1));
//!
//! let yhat = seq.forward(&[0.5, 0.5])?;
//! let loss_fn = MSELoss::new(&[1.0], &yhat)?;
//! seq.backward(&loss_fn, 0.1)?;
//! assert!(loss_fn.loss() > 0.0);
//! # Ok::<(), seqnet::NetError>(())
//! ```

pub mod core;
pub mod nn;
pub mod train;

pub use crate::core::error::{NetError, Result};
pub use crate::core::matrix::Matrix;
pub use crate::nn::activation::{ActivationLayer, Sigmoid};
pub use crate::nn::dense::DenseLayer;
pub use crate::nn::linear::Linear;
pub use crate::nn::loss::{LossFunction, MSELoss};
pub use crate::nn::sequential::Sequential;
pub use crate::nn::{Layer, Nodes};
pub use crate::train::{fit, TrainConfig, TrainReport};
