//! Scale parameters shared by all kernel families
//!
//! Kernels are configured once through [`KernelParams`] and checked into an
//! immutable [`Kernels`] value which is then only read while scoring.

use crate::errors::{KernelError, Result};
use linfa::ParamGuard;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Output scale `t` used when none is specified
pub const DEFAULT_OUTPUT_SCALE: f64 = 1.0;
/// Length scale `l` used when none is specified
pub const DEFAULT_LENGTH_SCALE: f64 = 1.0;

/// Checked kernel scales: the output scale `t` (signal standard deviation)
/// and the length scale `l` (smoothness).
///
/// The kernel functions themselves are available as methods,
/// see [`Kernels::squared_exp`], [`Kernels::ard_matern`] and [`Kernels::trivial`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Kernels {
    pub(crate) t: f64,
    pub(crate) l: f64,
}

impl Default for Kernels {
    fn default() -> Kernels {
        Kernels {
            t: DEFAULT_OUTPUT_SCALE,
            l: DEFAULT_LENGTH_SCALE,
        }
    }
}

impl Kernels {
    /// Kernel scales built from output scale `t` and length scale `l`
    pub fn new(t: f64, l: f64) -> Result<Kernels> {
        KernelParams::new().t(t).l(l).check()
    }

    /// Unchecked parameters to be configured
    pub fn params() -> KernelParams {
        KernelParams::new()
    }

    /// Output scale
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Length scale
    pub fn l(&self) -> f64 {
        self.l
    }
}

/// Kernel scales builder, checked with [`ParamGuard`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct KernelParams(pub Kernels);

impl Default for KernelParams {
    fn default() -> KernelParams {
        KernelParams(Kernels::default())
    }
}

impl KernelParams {
    /// Parameters with default scales `t = 1` and `l = 1`
    pub fn new() -> KernelParams {
        Self::default()
    }

    /// Sets the output scale `t`
    pub fn t(mut self, t: f64) -> Self {
        self.0.t = t;
        self
    }

    /// Sets the length scale `l`
    pub fn l(mut self, l: f64) -> Self {
        self.0.l = l;
        self
    }
}

impl ParamGuard for KernelParams {
    type Checked = Kernels;
    type Error = KernelError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.t.is_finite() {
            return Err(KernelError::InvalidValue(format!(
                "output scale t should be finite, got {}",
                self.0.t
            )));
        }
        if !(self.0.l.is_finite() && self.0.l > 0.) {
            return Err(KernelError::InvalidValue(format!(
                "length scale l should be finite and strictly positive, got {}",
                self.0.l
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
