use super::flatten;
use crate::errors::Result;
use crate::params::Acquisition;
use crate::posterior::{Posterior, PosteriorPredictor};
use crate::utils::norm_cdf;
use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension, Zip};

/// Probability of improvement over `ymax`.
/// Without uncertainty (zero variance) the value is 1.
pub fn probability_of_improvement(posterior: &Posterior, ymax: f64) -> f64 {
    if posterior.variance == 0. {
        1.
    } else {
        norm_cdf((posterior.mean - ymax) / posterior.sigma())
    }
}

impl Acquisition {
    /// Probability of improvement at `x` of the `gp` posterior over `ymax`
    pub fn poi(
        &self,
        x: &ArrayView1<f64>,
        gp: &impl PosteriorPredictor,
        ymax: f64,
    ) -> Result<f64> {
        let posterior = gp.predict_posterior(x)?;
        Ok(probability_of_improvement(&posterior, ymax))
    }

    /// Probabilities of improvement over `ymax` of candidates given their
    /// posterior `mean` and `variance`, in input order.
    ///
    /// Candidates with a zero variance get a probability of 1 as in the
    /// single point case [`Acquisition::poi`]. The Z-score is never computed
    /// for them, hence a candidate with `mean == ymax` and no variance scores
    /// 1 instead of NaN.
    pub fn full_poi(
        &self,
        ymax: f64,
        mean: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
        variance: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
    ) -> Array1<f64> {
        let (mean, variance) = (flatten(mean), flatten(variance));
        let mut n_degenerated = 0;
        let poi = Zip::from(&mean).and(&variance).map_collect(|&m, &v| {
            if v == 0. {
                n_degenerated += 1;
            }
            probability_of_improvement(&Posterior::new(m, v), ymax)
        });
        if n_degenerated > 0 {
            debug!("PoI set to 1 for {n_degenerated} candidate(s) without uncertainty");
        }
        poi
    }
}
