//! Repeated single-sample gradient descent over a [`Sequential`](crate::nn::sequential::Sequential).

mod config;
mod trainer;

pub use config::TrainConfig;
pub use trainer::{fit, TrainReport};
