//! Acquisition functions scoring how promising a point is to be sampled next
//!
//! Each policy comes in two flavours:
//!
//! * single point: the posterior is requested from a [`PosteriorPredictor`]
//!   at the given point, see [`Acquisition::ucb`], [`Acquisition::ei`], [`Acquisition::poi`],
//! * bulk: means and variances already computed for many candidates are
//!   scored at once, see [`Acquisition::full_ucb`], [`Acquisition::full_ei`],
//!   [`Acquisition::full_poi`].
//!
//! Higher scores are more promising.

mod ei;
mod poi;
mod ucb;

pub use ei::expected_improvement;
pub use poi::probability_of_improvement;
pub use ucb::ucb_value;

use crate::errors::{AcquisitionError, Result};
use crate::params::Acquisition;
use crate::posterior::PosteriorPredictor;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};
use std::fmt;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Available acquisition policies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum AcquisitionPolicy {
    /// Upper confidence bound `mean + kappa * sigma`
    Ucb,
    /// Expected improvement over the current best value
    #[default]
    Ei,
    /// Probability of improvement over the current best value
    PoI,
}

impl AcquisitionPolicy {
    /// Short name of the policy
    pub fn name(&self) -> &'static str {
        match self {
            AcquisitionPolicy::Ucb => "UCB",
            AcquisitionPolicy::Ei => "EI",
            AcquisitionPolicy::PoI => "PoI",
        }
    }
}

impl fmt::Display for AcquisitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Values of `a` as a vector in logical order, so that a (n, 1) column
/// is handled like a n vector.
pub(crate) fn flatten(a: &ArrayBase<impl Data<Elem = f64>, impl Dimension>) -> Array1<f64> {
    a.iter().copied().collect()
}

impl Acquisition {
    /// Score of point `x` under the given `policy`.
    /// `ymax` is the best objective value observed so far (unused by UCB).
    pub fn score(
        &self,
        policy: AcquisitionPolicy,
        x: &ArrayView1<f64>,
        gp: &impl PosteriorPredictor,
        ymax: f64,
    ) -> Result<f64> {
        match policy {
            AcquisitionPolicy::Ucb => self.ucb(x, gp),
            AcquisitionPolicy::Ei => self.ei(x, gp, ymax),
            AcquisitionPolicy::PoI => self.poi(x, gp, ymax),
        }
    }

    /// Scores of all candidates given their posterior means and variances
    /// under the given `policy`.
    /// `ymax` is the best objective value observed so far (unused by UCB).
    pub fn score_all(
        &self,
        policy: AcquisitionPolicy,
        ymax: f64,
        mean: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
        variance: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
    ) -> Result<Array1<f64>> {
        if mean.len() != variance.len() {
            return Err(AcquisitionError::LengthMismatch {
                mean: mean.len(),
                variance: variance.len(),
            });
        }
        let scores = match policy {
            AcquisitionPolicy::Ucb => self.full_ucb(mean, variance),
            AcquisitionPolicy::Ei => self.full_ei(ymax, mean, variance),
            AcquisitionPolicy::PoI => self.full_poi(ymax, mean, variance),
        };
        Ok(scores)
    }
}
