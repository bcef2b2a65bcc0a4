//! Regression metrics over paired true/predicted values.
//!
//! Every function takes the observed values first and the predictions second,
//! paired by index. Lengths are checked before anything else, so a mismatch is
//! reported as [`MetricError::ShapeMismatch`] even when one side is empty.

use crate::error::MetricError;

/// Checks pairing and emptiness, returning the observation count.
fn observation_count(truth: &[f64], predicted: &[f64]) -> Result<usize, MetricError> {
    if truth.len() != predicted.len() {
        return Err(MetricError::ShapeMismatch {
            truth: truth.len(),
            predicted: predicted.len(),
        });
    }

    if truth.is_empty() {
        return Err(MetricError::EmptyInput);
    }

    Ok(truth.len())
}

/// Sum over i of (predicted[i] - truth[i])².
pub fn sum_squared_error(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    observation_count(truth, predicted)?;

    let sse = truth.iter()
        .zip(predicted.iter())
        .map(|(t, p)| (p - t).powi(2))
        .sum::<f64>();

    Ok(sse)
}

/// Mean of the squared residuals. Symmetric in its arguments, reported in squared target units.
pub fn mean_squared_error(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let item_count = observation_count(truth, predicted)?;
    let mse = sum_squared_error(truth, predicted)? / (item_count as f64);

    Ok(mse)
}

/// Square root of [`mean_squared_error`], in the same units as the target.
pub fn root_mean_squared_error(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    mean_squared_error(truth, predicted).map(f64::sqrt)
}

/// Mean of the absolute residuals.
pub fn mean_absolute_deviation(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let item_count = observation_count(truth, predicted)?;

    let mad = truth.iter()
        .zip(predicted.iter())
        .map(|(t, p)| (p - t).abs())
        .sum::<f64>() / (item_count as f64);

    Ok(mad)
}

/// Coefficient of determination, 1 - SSE/SST.
///
/// Equals 1 for a perfect fit and 0 for a model no better than predicting the mean of `truth`.
/// Worse fits go negative. When every true value is identical SST is zero and
/// [`MetricError::DegenerateInput`] is returned instead of dividing.
pub fn r2_score(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let item_count = observation_count(truth, predicted)?;

    // Identical values can still leave a tiny non-zero SST after rounding.
    if truth.iter().all(|&t| t == truth[0]) {
        return Err(MetricError::DegenerateInput);
    }

    let mean = truth.iter().sum::<f64>() / (item_count as f64);

    let sse = sum_squared_error(truth, predicted)?;
    let sst = truth.iter()
        .map(|t| (t - mean).powi(2))
        .sum::<f64>();

    if sst == 0.0 {
        return Err(MetricError::DegenerateInput);
    }

    Ok(1.0 - sse / sst)
}
