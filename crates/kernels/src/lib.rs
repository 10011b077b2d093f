//! This library provides the kernels and covariance builders used by the
//! Gaussian process surrogates of a Bayesian optimization loop.
//!
//! Kernels measure the similarity of two points. They are parameterized by an
//! output scale `t` and a length scale `l` set once and read-only afterwards:
//!
//! * `squared_exp`: squared exponential, infinitely differentiable,
//! * `ard_matern`: Matérn 5/2, rougher similarity decay,
//! * `trivial`: linear kernel (scaled dot product).
//!
//! Covariance builders turn point sets into covariance matrices (full mode)
//! or element-wise covariance vectors (fast mode) given any [`Kernel`].
//!
//! # Example
//!
//! ```
//! use bayesbox_kernels::{covariance_matrix, sample_covariance, KernelKind, Kernels};
//! use linfa::ParamGuard;
//! use ndarray::array;
//!
//! let kernels = Kernels::params().t(1.).l(0.5).check().expect("valid scales");
//! let kernel = kernels.select(KernelKind::ArdMatern);
//!
//! let xt = array![[0., 0.], [1., 0.], [0., 1.]];
//! let k = covariance_matrix(&xt, &xt, &kernel);
//! assert_eq!(k.shape(), &[3, 3]);
//!
//! let r = sample_covariance(&xt, &array![0.5, 0.5], &kernel);
//! assert_eq!(r.len(), 3);
//! ```
//!
//! # Features
//!
//! * `serializable`: serde (de)serialization of kernel configurations
//! * `parallel`: full covariance matrices are filled in parallel using rayon
#![warn(missing_docs)]

mod covariance;
mod errors;
mod kernels;
mod params;

pub use covariance::*;
pub use errors::*;
pub use kernels::*;
pub use params::*;
