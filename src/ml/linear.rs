//! Binary logistic regression weights.

use serde::{Deserialize, Serialize};

use crate::error::{JudolError, Result};
use crate::ml::LinearWeights;

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Fitted weights of a binary linear classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Reject empty or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(JudolError::invalid_model("linear model has no coefficients"));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(JudolError::invalid_model("linear model has non-finite weights"));
        }
        Ok(())
    }
}

impl LinearWeights for LinearModel {
    fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }
}
