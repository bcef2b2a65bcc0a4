use std::fmt;

use crate::error::MetricError;
use crate::metrics::{mean_absolute_deviation, mean_squared_error, r2_score};

/// All four regression metrics for one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionReport {
    pub mse: f64,
    pub rmse: f64,
    pub mad: f64,
    pub r2: f64,
}

impl RegressionReport {
    /// Computes every metric, stopping at the first failure.
    pub fn compute(truth: &[f64], predicted: &[f64]) -> Result<Self, MetricError> {
        let mse = mean_squared_error(truth, predicted)?;

        Ok(RegressionReport {
            mse,
            rmse: mse.sqrt(),
            mad: mean_absolute_deviation(truth, predicted)?,
            r2: r2_score(truth, predicted)?,
        })
    }
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MSE={:.4} RMSE={:.4} MAD={:.4} R²={:.4}",
            self.mse, self.rmse, self.mad, self.r2
        )
    }
}
