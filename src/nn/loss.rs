use crate::core::error::{check_len, Result};

/// A loss bound to one prediction; built fresh for every training step.
pub trait LossFunction {
    fn loss(&self) -> f32;

    /// Gradient of [`LossFunction::loss`] with respect to each prediction.
    fn backward(&self) -> Vec<f32>;
}

/// Half sum of squared errors.
#[derive(Debug, Clone, PartialEq)]
pub struct MSELoss {
    y: Vec<f32>,
    yhat: Vec<f32>,
}

impl MSELoss {
    pub fn new(y: &[f32], yhat: &[f32]) -> Result<MSELoss> {
        check_len(y.len(), yhat.len())?;
        Ok(MSELoss {
            y: y.to_vec(),
            yhat: yhat.to_vec(),
        })
    }
}

impl LossFunction for MSELoss {
    fn loss(&self) -> f32 {
        let s = self
            .y
            .iter()
            .zip(self.yhat.iter())
            .fold(0.0, |acc, (y, yhat)| acc + (y - yhat) * (y - yhat));
        s / 2.0
    }

    fn backward(&self) -> Vec<f32> {
        self.y
            .iter()
            .zip(self.yhat.iter())
            .map(|(y, yhat)| -(y - yhat))
            .collect()
    }
}
