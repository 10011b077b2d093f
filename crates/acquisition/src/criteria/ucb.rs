use super::flatten;
use crate::errors::Result;
use crate::params::Acquisition;
use crate::posterior::{Posterior, PosteriorPredictor};
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension, Zip};

/// Upper confidence bound `mean + kappa * sqrt(variance)`.
/// A zero variance gives the mean.
pub fn ucb_value(posterior: &Posterior, kappa: f64) -> f64 {
    posterior.mean + kappa * posterior.variance.sqrt()
}

impl Acquisition {
    /// Upper confidence bound at `x` of the `gp` posterior
    pub fn ucb(&self, x: &ArrayView1<f64>, gp: &impl PosteriorPredictor) -> Result<f64> {
        let posterior = gp.predict_posterior(x)?;
        Ok(ucb_value(&posterior, self.kappa))
    }

    /// Upper confidence bounds of candidates given their posterior
    /// `mean` and `variance`, in input order
    pub fn full_ucb(
        &self,
        mean: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
        variance: &ArrayBase<impl Data<Elem = f64>, impl Dimension>,
    ) -> Array1<f64> {
        let (mean, variance) = (flatten(mean), flatten(variance));
        Zip::from(&mean)
            .and(&variance)
            .map_collect(|&m, &v| m + self.kappa * v.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn gp(_x: &ArrayView1<f64>) -> Posterior {
        Posterior::new(5., 4.)
    }

    #[test]
    fn test_ucb() {
        let acq = Acquisition::new(2.).unwrap();
        let x = array![1., 1.];
        assert_eq!(acq.ucb(&x.view(), &gp), Ok(9.));
        assert_eq!(ucb_value(&Posterior::new(5., 4.), 2.), 9.);
    }

    #[test]
    fn test_ucb_zero_variance_is_mean() {
        assert_eq!(ucb_value(&Posterior::new(3., 0.), 10.), 3.);
    }

    #[test]
    fn test_full_ucb() {
        let acq = Acquisition::new(2.).unwrap();
        let scores = acq.full_ucb(&array![5., 1., -1.], &array![4., 0., 1.]);
        assert_eq!(scores, array![9., 1., 1.]);
    }

    #[test]
    fn test_full_ucb_non_finite_propagates() {
        let acq = Acquisition::default();
        let scores = acq.full_ucb(&array![f64::NAN, 1.], &array![1., f64::INFINITY]);
        assert!(scores[0].is_nan());
        assert_eq!(scores[1], f64::INFINITY);
    }
}
