//! Kernel functions measuring similarity between two points
//!
//! Three families are available, all sharing the scales of [`Kernels`]:
//!
//! * squared exponential: `t² exp(-|x1 - x2|² / 2l²)`
//! * Matérn 5/2: `t² (1 + √(5r²) + 5r²/3) exp(-√(5r²))` with `r² = |x1 - x2|² / l²`
//! * trivial (linear): `t x1.x2`
//!
//! Points of different dimensions are a caller error which panics inside ndarray.

use crate::params::Kernels;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};
use std::fmt;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// A similarity measure between two points.
///
/// Covariance builders are generic over this trait. It is implemented by
/// [`ScaledKernel`] and by any closure taking two point views, such as
/// `kernel_fn(|a, b| kernels.squared_exp(a, b))`.
pub trait Kernel: Sync {
    /// Kernel value between `x1` and `x2`
    fn value(&self, x1: &ArrayView1<f64>, x2: &ArrayView1<f64>) -> f64;
}

impl<F> Kernel for F
where
    F: Fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64 + Sync,
{
    fn value(&self, x1: &ArrayView1<f64>, x2: &ArrayView1<f64>) -> f64 {
        self(x1, x2)
    }
}

/// Turns a closure into a [`Kernel`], helping type inference of its arguments
///
/// ```
/// use bayesbox_kernels::{kernel_fn, Kernel, Kernels};
/// use ndarray::array;
///
/// let kernels = Kernels::default();
/// let kernel = kernel_fn(|a, b| kernels.squared_exp(a, b));
/// let x = array![0., 0.];
/// assert_eq!(kernel.value(&x.view(), &x.view()), 1.);
/// ```
pub fn kernel_fn<F>(f: F) -> F
where
    F: Fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64 + Sync,
{
    f
}

fn sq_dist(
    x1: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    x2: &ArrayBase<impl Data<Elem = f64>, Ix1>,
) -> f64 {
    let d = x1 - x2;
    d.dot(&d)
}

impl Kernels {
    /// Squared exponential kernel value
    pub fn squared_exp(
        &self,
        x1: &ArrayBase<impl Data<Elem = f64>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    ) -> f64 {
        self.t.powi(2) * (-sq_dist(x1, x2) / (2. * self.l.powi(2))).exp()
    }

    /// Matérn 5/2 kernel value
    pub fn ard_matern(
        &self,
        x1: &ArrayBase<impl Data<Elem = f64>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    ) -> f64 {
        let r2 = sq_dist(x1, x2) / self.l.powi(2);
        let sqrt_5r2 = (5. * r2).sqrt();
        self.t.powi(2) * (1. + sqrt_5r2 + 5. / 3. * r2) * (-sqrt_5r2).exp()
    }

    /// Linear kernel value, the dot product scaled by `t`.
    /// Not positive definite in general.
    pub fn trivial(
        &self,
        x1: &ArrayBase<impl Data<Elem = f64>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    ) -> f64 {
        self.t * x1.dot(x2)
    }

    /// Binds these scales to one kernel family
    pub fn select(&self, kind: KernelKind) -> ScaledKernel {
        ScaledKernel {
            scales: *self,
            kind,
        }
    }
}

/// Available kernel families
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum KernelKind {
    /// See [`Kernels::squared_exp`]
    #[default]
    SquaredExponential,
    /// See [`Kernels::ard_matern`]
    ArdMatern,
    /// See [`Kernels::trivial`]
    Trivial,
}

impl KernelKind {
    /// Name of the kernel family
    pub fn name(&self) -> &'static str {
        match self {
            KernelKind::SquaredExponential => "SquaredExponential",
            KernelKind::ArdMatern => "ArdMatern",
            KernelKind::Trivial => "Trivial",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A kernel family with its scales, usable wherever a [`Kernel`] is expected
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct ScaledKernel {
    scales: Kernels,
    kind: KernelKind,
}

impl ScaledKernel {
    /// Scales of the kernel
    pub fn scales(&self) -> &Kernels {
        &self.scales
    }

    /// Family of the kernel
    pub fn kind(&self) -> KernelKind {
        self.kind
    }
}

impl Kernel for ScaledKernel {
    fn value(&self, x1: &ArrayView1<f64>, x2: &ArrayView1<f64>) -> f64 {
        match self.kind {
            KernelKind::SquaredExponential => self.scales.squared_exp(x1, x2),
            KernelKind::ArdMatern => self.scales.ard_matern(x1, x2),
            KernelKind::Trivial => self.scales.trivial(x1, x2),
        }
    }
}

impl fmt::Display for ScaledKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(t={}, l={})", self.kind, self.scales.t, self.scales.l)
    }
}
