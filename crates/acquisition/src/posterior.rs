//! Interface to the Gaussian process surrogate
//!
//! The surrogate itself (training, hyperparameters) lives outside this crate,
//! acquisition functions only need its posterior prediction at one point.

use crate::errors::Result;
use ndarray::ArrayView1;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Posterior summary of a Gaussian process at a given point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Posterior {
    /// Predicted value
    pub mean: f64,
    /// Prediction variance, expected to be non negative
    pub variance: f64,
}

impl Posterior {
    /// Posterior from its mean and variance
    pub fn new(mean: f64, variance: f64) -> Self {
        Posterior { mean, variance }
    }

    /// Prediction standard deviation
    pub fn sigma(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl From<(f64, f64)> for Posterior {
    fn from((mean, variance): (f64, f64)) -> Self {
        Posterior { mean, variance }
    }
}

/// A trait for surrogates able to predict their posterior at one point
pub trait PosteriorPredictor {
    /// Posterior mean and variance at point `x`
    fn predict_posterior(&self, x: &ArrayView1<f64>) -> Result<Posterior>;
}

impl<F> PosteriorPredictor for F
where
    F: Fn(&ArrayView1<f64>) -> Posterior,
{
    fn predict_posterior(&self, x: &ArrayView1<f64>) -> Result<Posterior> {
        Ok(self(x))
    }
}
