use super::flatten;
use crate::errors::Result;
use crate::params::Acquisition;
use crate::posterior::{Posterior, PosteriorPredictor};
use crate::utils::{norm_cdf, norm_pdf};
use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension, Zip};

fn ei_formula(improvement: f64, sigma: f64) -> f64 {
    let z = improvement / sigma;
    improvement * norm_cdf(z) + sigma * norm_pdf(z)
}

/// Expected improvement over `ymax`.
/// Without uncertainty (zero variance) no improvement is expected: the value is 0.
pub fn expected_improvement(posterior: &Posterior, ymax: f64) -> f64 {
    if posterior.variance == 0. {
        0.
    } else {
        ei_formula(posterior.mean - ymax, posterior.sigma())
    }
}

impl Acquisition {
    /// Expected improvement at `x` of the `gp` posterior over `ymax`
    pub fn ei(
        &self,
        x: &ArrayView1<f64>,
        gp: &impl PosteriorPredictor,
        ymax: f64,
    ) -> Result<f64> {
        let posterior = gp.predict_posterior(x)?;
        Ok(expected_improvement(&posterior, ymax))
    }

    /// Expected improvements over `ymax` of candidates given their posterior
    /// `mean` and `variance`, in input order.
    ///
    /// Scores are 0 where the standard deviation is not strictly positive
    /// (zero variance), the formula is only evaluated elsewhere so that no
    /// division by zero occurs.
    pub fn full_ei(
        &self,
        ymax: f64,
        mean: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
        variance: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
    ) -> Array1<f64> {
        debug!("Compute EI of {} candidates with ymax = {}", mean.len(), ymax);
        let mean = flatten(mean);
        let sigma = flatten(variance).mapv(f64::sqrt);

        let mut ei = Array1::zeros(mean.len());
        let mut n_masked = 0;
        Zip::from(&mut ei)
            .and(&mean)
            .and(&sigma)
            .for_each(|ei, &m, &s| {
                if s > 0. {
                    *ei = ei_formula(m - ymax, s);
                } else {
                    n_masked += 1;
                }
            });
        if n_masked > 0 {
            debug!("EI set to 0 for {n_masked} candidate(s) without uncertainty");
        }
        ei
    }
}
