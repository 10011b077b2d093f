//! Covariance structures built from point sets and a [`Kernel`]
//!
//! * [`covariance_matrix`]: full pairwise matrix between two sets (full mode)
//! * [`paired_covariance`]: element-wise vector between two aligned sets (fast mode)
//! * [`sample_covariance`]: vector between a set and one new sample
//!
//! Multi-point operations first normalize their inputs with [`AsPointSet`]
//! so that a single point given as a 1-D array is handled as a 1×D set.
//! Shape mismatches are a caller error and panic inside ndarray, use
//! [`try_covariance`] to get them reported as [`KernelError`].

use crate::errors::{KernelError, Result};
use crate::kernels::Kernel;
use log::trace;
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Ix1, Ix2, Zip};

#[cfg(feature = "parallel")]
use ndarray::parallel::prelude::*;

/// Inputs which can be viewed as a set of points, one point per row.
pub trait AsPointSet {
    /// View as a (nb points, dim) matrix
    fn as_point_set(&self) -> ArrayView2<'_, f64>;
}

impl<S: Data<Elem = f64>> AsPointSet for ArrayBase<S, Ix1> {
    /// A lone point is a set of size one
    fn as_point_set(&self) -> ArrayView2<'_, f64> {
        self.view().insert_axis(Axis(0))
    }
}

impl<S: Data<Elem = f64>> AsPointSet for ArrayBase<S, Ix2> {
    fn as_point_set(&self) -> ArrayView2<'_, f64> {
        self.view()
    }
}

/// Kind of covariance structure to compute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CovarianceMode {
    /// Pairwise matrix
    #[default]
    Full,
    /// Element-wise vector of aligned point sets
    Fast,
}

/// Result of [`covariance`]
#[derive(Clone, Debug, PartialEq)]
pub enum Covariance {
    /// (n1, n2) matrix
    Full(Array2<f64>),
    /// n vector
    Fast(Array1<f64>),
}

impl Covariance {
    /// Shape of the underlying array
    pub fn shape(&self) -> &[usize] {
        match self {
            Covariance::Full(m) => m.shape(),
            Covariance::Fast(v) => v.shape(),
        }
    }

    /// Full covariance matrix if any
    pub fn as_matrix(&self) -> Option<&Array2<f64>> {
        match self {
            Covariance::Full(m) => Some(m),
            Covariance::Fast(_) => None,
        }
    }

    /// Element-wise covariance vector if any
    pub fn as_vector(&self) -> Option<&Array1<f64>> {
        match self {
            Covariance::Full(_) => None,
            Covariance::Fast(v) => Some(v),
        }
    }

    /// Consumes into the full covariance matrix if any
    pub fn into_matrix(self) -> Option<Array2<f64>> {
        match self {
            Covariance::Full(m) => Some(m),
            Covariance::Fast(_) => None,
        }
    }

    /// Consumes into the element-wise covariance vector if any
    pub fn into_vector(self) -> Option<Array1<f64>> {
        match self {
            Covariance::Full(_) => None,
            Covariance::Fast(v) => Some(v),
        }
    }
}

/// Computes the (n1, n2) covariance matrix `M[i, j] = kernel(x1_i, x2_j)`
/// between the n1 points of `x1` and the n2 points of `x2`.
pub fn covariance_matrix<K: Kernel + ?Sized>(
    x1: &impl AsPointSet,
    x2: &impl AsPointSet,
    kernel: &K,
) -> Array2<f64> {
    let (x1, x2) = (x1.as_point_set(), x2.as_point_set());
    let mut cov = Array2::zeros((x1.nrows(), x2.nrows()));
    let fill = |(i, j): (usize, usize), v: &mut f64| {
        *v = kernel.value(&x1.row(i), &x2.row(j));
    };
    #[cfg(not(feature = "parallel"))]
    Zip::indexed(&mut cov).for_each(fill);
    #[cfg(feature = "parallel")]
    Zip::indexed(&mut cov).par_for_each(fill);
    trace!("Covariance matrix of shape {:?}", cov.shape());
    cov
}

/// Computes the covariance vector `v[i] = kernel(x1_i, x2_i)` of two aligned
/// point sets, that is the diagonal of the full covariance matrix without
/// computing it.
///
/// **Panics** if `x1` and `x2` do not have the same number of points.
pub fn paired_covariance<K: Kernel + ?Sized>(
    x1: &impl AsPointSet,
    x2: &impl AsPointSet,
    kernel: &K,
) -> Array1<f64> {
    let (x1, x2) = (x1.as_point_set(), x2.as_point_set());
    let cov = Zip::from(x1.rows())
        .and(x2.rows())
        .map_collect(|a, b| kernel.value(&a, &b));
    trace!("Paired covariance of length {}", cov.len());
    cov
}

/// Computes either the full covariance matrix or the element-wise
/// covariance vector of two point sets depending on `mode`.
pub fn covariance<K: Kernel + ?Sized>(
    x1: &impl AsPointSet,
    x2: &impl AsPointSet,
    kernel: &K,
    mode: CovarianceMode,
) -> Covariance {
    match mode {
        CovarianceMode::Full => Covariance::Full(covariance_matrix(x1, x2, kernel)),
        CovarianceMode::Fast => Covariance::Fast(paired_covariance(x1, x2, kernel)),
    }
}

/// Same as [`covariance`] but point sets shapes are checked beforehand
pub fn try_covariance<K: Kernel + ?Sized>(
    x1: &impl AsPointSet,
    x2: &impl AsPointSet,
    kernel: &K,
    mode: CovarianceMode,
) -> Result<Covariance> {
    let (v1, v2) = (x1.as_point_set(), x2.as_point_set());
    if v1.ncols() != v2.ncols() {
        return Err(KernelError::DimensionMismatch {
            left: v1.ncols(),
            right: v2.ncols(),
        });
    }
    if mode == CovarianceMode::Fast && v1.nrows() != v2.nrows() {
        return Err(KernelError::LengthMismatch {
            left: v1.nrows(),
            right: v2.nrows(),
        });
    }
    Ok(covariance(&v1, &v2, kernel, mode))
}

/// Computes the covariance vector `v[i] = kernel(x_i, sample)` between
/// the points of `x` and a new `sample` point.
pub fn sample_covariance<K: Kernel + ?Sized>(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    sample: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    kernel: &K,
) -> Array1<f64> {
    let sample = sample.view();
    x.rows()
        .into_iter()
        .map(|row| kernel.value(&row, &sample))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kernel_fn, KernelKind, Kernels};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array};
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;

    fn random_points(n: usize, dim: usize, seed: u64) -> Array2<f64> {
        let mut rng = Xoshiro256Plus::seed_from_u64(seed);
        Array::random_using((n, dim), Uniform::new(-1., 1.), &mut rng)
    }

    #[test]
    fn test_covariance_matrix_shape() {
        let kernel = Kernels::default().select(KernelKind::SquaredExponential);
        let x1 = random_points(5, 3, 0);
        let x2 = random_points(7, 3, 1);
        let cov = covariance_matrix(&x1, &x2, &kernel);
        assert_eq!(cov.shape(), &[5, 7]);
        assert_eq!(cov[[2, 4]], kernel.value(&x1.row(2), &x2.row(4)));
    }

    #[test]
    fn test_covariance_matrix_symmetric() {
        let x = random_points(8, 2, 42);
        for kind in [KernelKind::SquaredExponential, KernelKind::ArdMatern] {
            let kernel = Kernels::new(1.3, 0.4).unwrap().select(kind);
            let cov = covariance_matrix(&x, &x, &kernel);
            assert_eq!(cov, cov.t());
            for d in cov.diag() {
                assert_abs_diff_eq!(*d, 1.69, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_covariance_matrix_values() {
        let kernels = Kernels::default();
        let kernel = kernel_fn(|a, b| kernels.squared_exp(a, b));
        let x1 = array![[0., 0.], [1., 0.]];
        let x2 = array![[0., 0.]];
        let cov = covariance_matrix(&x1, &x2, &kernel);
        assert_abs_diff_eq!(cov, array![[1.], [(-0.5f64).exp()]], epsilon = 1e-15);
    }

    #[test]
    fn test_single_points_are_normalized() {
        let kernel = Kernels::default().select(KernelKind::SquaredExponential);
        let p = array![0., 0.];
        let x = array![[0., 0.], [1., 0.], [0., 2.]];
        let cov = covariance_matrix(&p, &x, &kernel);
        assert_eq!(cov.shape(), &[1, 3]);
        let cov = covariance_matrix(&x, &p, &kernel);
        assert_eq!(cov.shape(), &[3, 1]);
        let cov = covariance_matrix(&p, &p, &kernel);
        assert_eq!(cov, array![[1.]]);
        assert_eq!(p.as_point_set(), array![[0., 0.]]);
    }

    #[test]
    fn test_paired_covariance_is_diagonal() {
        let x = random_points(6, 4, 7);
        for kind in [
            KernelKind::SquaredExponential,
            KernelKind::ArdMatern,
            KernelKind::Trivial,
        ] {
            let kernel = Kernels::new(0.8, 2.).unwrap().select(kind);
            let full = covariance_matrix(&x, &x, &kernel);
            let fast = paired_covariance(&x, &x, &kernel);
            assert_eq!(fast.len(), 6);
            assert_eq!(fast, full.diag());
        }
    }

    #[test]
    fn test_paired_covariance_of_distinct_sets() {
        let kernels = Kernels::new(2., 1.).unwrap();
        let kernel = kernels.select(KernelKind::Trivial);
        let x1 = array![[1., 2.], [0., 1.]];
        let x2 = array![[3., 4.], [5., 6.]];
        assert_eq!(paired_covariance(&x1, &x2, &kernel), array![22., 12.]);
    }

    #[test]
    #[should_panic]
    fn test_paired_covariance_length_mismatch_panics() {
        let kernel = Kernels::default().select(KernelKind::SquaredExponential);
        paired_covariance(&random_points(3, 2, 0), &random_points(4, 2, 0), &kernel);
    }

    #[test]
    fn test_covariance_modes() {
        let kernel = Kernels::default().select(KernelKind::ArdMatern);
        let x = random_points(4, 2, 3);
        let full = covariance(&x, &x, &kernel, CovarianceMode::default());
        assert_eq!(full.shape(), &[4, 4]);
        assert!(full.as_vector().is_none());
        let fast = covariance(&x, &x, &kernel, CovarianceMode::Fast);
        assert_eq!(fast.shape(), &[4]);
        assert_eq!(
            fast.into_vector().unwrap(),
            full.into_matrix().unwrap().diag()
        );
    }

    #[test]
    fn test_try_covariance() {
        let kernel = Kernels::default().select(KernelKind::SquaredExponential);
        let x1 = random_points(3, 2, 0);
        let x2 = random_points(4, 2, 1);
        assert_eq!(
            try_covariance(&x1, &random_points(3, 5, 2), &kernel, CovarianceMode::Full),
            Err(KernelError::DimensionMismatch { left: 2, right: 5 })
        );
        assert_eq!(
            try_covariance(&x1, &x2, &kernel, CovarianceMode::Fast),
            Err(KernelError::LengthMismatch { left: 3, right: 4 })
        );
        let cov = try_covariance(&x1, &x2, &kernel, CovarianceMode::Full).unwrap();
        assert_eq!(cov.as_matrix(), Some(&covariance_matrix(&x1, &x2, &kernel)));
    }

    #[test]
    fn test_sample_covariance() {
        let kernels = Kernels::default();
        let kernel = kernels.select(KernelKind::SquaredExponential);
        let x = array![[0., 0.], [1., 0.], [3., 1.]];
        let sample = array![1., 0.];
        let cov = sample_covariance(&x, &sample, &kernel);
        assert_eq!(cov.len(), 3);
        assert_eq!(cov[1], 1.);
        assert_abs_diff_eq!(cov[0], (-0.5f64).exp(), epsilon = 1e-15);
        assert_eq!(
            cov,
            covariance_matrix(&x, &sample, &kernel).column(0).to_owned()
        );
    }

    #[test]
    fn test_idempotence() {
        let kernel = Kernels::new(1.1, 0.3).unwrap().select(KernelKind::ArdMatern);
        let x1 = random_points(5, 3, 11);
        let x2 = random_points(6, 3, 12);
        assert_eq!(
            covariance_matrix(&x1, &x2, &kernel),
            covariance_matrix(&x1, &x2, &kernel)
        );
        assert_eq!(
            sample_covariance(&x1, &x2.row(0), &kernel),
            sample_covariance(&x1, &x2.row(0), &kernel)
        );
    }
}
