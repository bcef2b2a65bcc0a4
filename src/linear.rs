//! Ordinary least squares through the normal equations.

use tracing::debug;

use crate::error::{Error, Result};
use crate::geoalg::f64_math::matrix::Matrix;

/// Least-squares linear regression, optionally with an intercept term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub fit_intercept: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression { fit_intercept: true }
    }
}

/// Coefficients learned by [`LinearRegression::fit`], one per feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_intercept() -> Self {
        LinearRegression { fit_intercept: false }
    }

    /// Solves (XᵀX)β = Xᵀy.
    /// # Arguments
    /// * `features` - One row per observation, one column per feature.
    /// * `target` - One value per row of `features`.
    /// # Returns
    /// The fitted model, or an error when the rows do not pin down every parameter
    /// or the features are collinear.
    pub fn fit(&self, features: &Matrix, target: &[f64]) -> Result<FittedLinearRegression> {
        if features.rows != target.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} target values", features.rows),
                actual: format!("{} target values", target.len()),
            });
        }

        let design = if self.fit_intercept {
            features.with_leading_ones()
        } else {
            features.clone()
        };
        let parameters = design.columns;
        if parameters == 0 || design.rows < parameters {
            return Err(Error::Underdetermined { rows: design.rows, parameters });
        }

        let transposed = design.get_transpose();
        let gram = transposed.mul(&design)?;
        let moments = transposed.mul_vector(target)?;
        let mut beta = gram.solve(&moments)?;

        let intercept = if self.fit_intercept { beta.remove(0) } else { 0.0 };
        debug!(
            rows = design.rows, parameters, intercept, coefficients = ?beta,
            "fitted linear regression"
        );

        Ok(FittedLinearRegression { intercept, coefficients: beta })
    }
}

impl FittedLinearRegression {
    /// Predicts one value per row of `features`.
    pub fn predict(&self, features: &Matrix) -> Result<Vec<f64>> {
        let predictions = features.mul_vector(&self.coefficients)?
            .into_iter()
            .map(|p| p + self.intercept)
            .collect();

        Ok(predictions)
    }
}
