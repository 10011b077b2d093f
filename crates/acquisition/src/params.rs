use crate::errors::{AcquisitionError, Result};
use linfa::ParamGuard;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Exploration constant used when none is specified
pub const DEFAULT_KAPPA: f64 = 1.0;

/// Checked acquisition configuration.
///
/// `kappa` is the exploration constant of the upper confidence bound,
/// it is fixed at construction and only read while scoring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Acquisition {
    pub(crate) kappa: f64,
}

impl Default for Acquisition {
    fn default() -> Acquisition {
        Acquisition {
            kappa: DEFAULT_KAPPA,
        }
    }
}

impl Acquisition {
    /// Acquisition with given exploration constant
    pub fn new(kappa: f64) -> Result<Acquisition> {
        AcquisitionParams::new().kappa(kappa).check()
    }

    /// Unchecked parameters to be configured
    pub fn params() -> AcquisitionParams {
        AcquisitionParams::new()
    }

    /// Exploration constant
    pub fn kappa(&self) -> f64 {
        self.kappa
    }
}

/// Acquisition builder, checked with [`ParamGuard`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct AcquisitionParams(pub Acquisition);

impl Default for AcquisitionParams {
    fn default() -> AcquisitionParams {
        AcquisitionParams(Acquisition::default())
    }
}

impl AcquisitionParams {
    /// Parameters with default exploration constant `kappa = 1`
    pub fn new() -> AcquisitionParams {
        Self::default()
    }

    /// Sets the exploration constant of the upper confidence bound
    pub fn kappa(mut self, kappa: f64) -> Self {
        self.0.kappa = kappa;
        self
    }
}

impl ParamGuard for AcquisitionParams {
    type Checked = Acquisition;
    type Error = AcquisitionError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.kappa.is_finite() {
            return Err(AcquisitionError::InvalidValue(format!(
                "kappa should be finite, got {}",
                self.0.kappa
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
