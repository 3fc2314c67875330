use tracing::{info, warn};

use super::TrainConfig;
use crate::core::error::{check_len, NetError, Result};
use crate::nn::loss::{LossFunction, MSELoss};
use crate::nn::sequential::Sequential;

/// Loss observed at every epoch, measured before that epoch's update.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub loss_history: Vec<f32>,
}

impl TrainReport {
    pub fn initial_loss(&self) -> Option<f32> {
        self.loss_history.first().copied()
    }

    pub fn final_loss(&self) -> Option<f32> {
        self.loss_history.last().copied()
    }
}

/// Trains `model` to map `x` to `y` under [`MSELoss`], one forward/backward
/// pair per epoch.
pub fn fit(
    model: &mut Sequential,
    x: &[f32],
    y: &[f32],
    config: &TrainConfig,
) -> Result<TrainReport> {
    config.validate()?;
    let last = model.layers().last().ok_or(NetError::NoLayers)?;
    check_len(last.n_outputs(), y.len())?;

    let mut loss_history = Vec::with_capacity(config.epochs);
    let mut warned = false;

    for epoch in 0..config.epochs {
        let yhat = model.forward(x)?;
        let loss_fn = MSELoss::new(y, &yhat)?;
        model.backward(&loss_fn, config.learning_rate)?;

        let loss = loss_fn.loss();
        loss_history.push(loss);

        if !loss.is_finite() && !warned {
            warn!(epoch, loss, "loss is no longer finite");
            warned = true;
        }
        if config.log_every > 0 && epoch % config.log_every == 0 {
            info!("Epoch {:6}/{}: loss = {:.6}", epoch, config.epochs, loss);
        }
    }

    Ok(TrainReport { loss_history })
}
