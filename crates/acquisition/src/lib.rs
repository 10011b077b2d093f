//! This library implements the acquisition functions of a Bayesian
//! optimization loop: given the posterior (mean, variance) of a Gaussian
//! process surrogate, they score how promising a point is to be sampled next.
//!
//! Three policies are available:
//!
//! * UCB: upper confidence bound `mean + kappa * sigma`,
//! * EI: expected improvement over the best value observed so far `ymax`,
//! * PoI: probability of improvement over `ymax`.
//!
//! Each of them is available for a single point, the surrogate being asked
//! for its posterior through the [`PosteriorPredictor`] trait, and in bulk
//! for many candidates whose posterior means and variances are already known.
//! Zero variances (noiseless surrogate at training points) get a defined
//! score: EI is 0 and PoI is 1.
//!
//! # Example
//!
//! ```
//! use bayesbox_acquisition::{Acquisition, AcquisitionPolicy, Posterior};
//! use ndarray::{array, ArrayView1};
//!
//! fn gp(x: &ArrayView1<f64>) -> Posterior {
//!     Posterior::new(x[0] * x[0], 0.25)
//! }
//!
//! let acq = Acquisition::new(2.).expect("valid kappa");
//! let x = array![1.5];
//! let ucb = acq.ucb(&x.view(), &gp).expect("prediction");
//! assert_eq!(ucb, 3.25);
//!
//! let mean = array![2.25, 1.0];
//! let variance = array![0.25, 0.];
//! let ei = acq
//!     .score_all(AcquisitionPolicy::Ei, 2.0, &mean, &variance)
//!     .expect("aligned posterior");
//! assert_eq!(ei[1], 0.);
//! ```
//!
//! # Logging
//!
//! Records are emitted with the `log` crate, [`init_logger`] installs a logger
//! controlled by the `BAYESBOX_LOG` environment variable.
#![warn(missing_docs)]

mod criteria;
mod errors;
mod params;
mod posterior;
mod utils;

pub use criteria::*;
pub use errors::*;
pub use params::*;
pub use posterior::*;
pub use utils::{init_logger, norm_cdf, norm_pdf, BAYESBOX_LOG};
