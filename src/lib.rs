//! # stepkmeans-rs
//!
//! Step-by-step k-means clustering over ndarray-backed point sets.
//!
//! ## Overview
//!
//! - [`PointSet`]: an append-only set of points with a fixed dimension
//! - [`Cluster`]: a centroid plus the dataset indices currently assigned to it
//! - [`Algorithm`]: drives the partition/update loop, one [`Algorithm::step`]
//!   at a time or to convergence with [`Algorithm::run`]
//! - [`KMeans`]: a `train()` / `predict()` facade over [`Algorithm`]
//!
//! A step assigns every point to its nearest centroid (ties go to the earlier
//! cluster) and then moves every centroid to the mean of its members. The run
//! has converged when no centroid moved beyond the configured [`Tolerance`].
//!
//! ## Example
//!
//! ```rust
//! use stepkmeans_rs::{Algorithm, PointSet};
//!
//! let data = PointSet::with_points(1, &[[0.0], [1.0], [9.0], [10.0]]).unwrap();
//! let mut algorithm = Algorithm::new(&data, 2, Some(&[0, 2][..])).unwrap();
//!
//! assert!(!algorithm.step());
//! assert!(algorithm.step());
//!
//! assert_eq!(algorithm.clusters()[0].centroid()[0], 0.5);
//! assert_eq!(algorithm.clusters()[1].member_indices(), &[2, 3]);
//! ```
//!
//! ## Reproducible runs
//!
//! ```rust
//! use stepkmeans_rs::{Algorithm, KMeansConfig, PointSet};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//!
//! let data = PointSet::from_array(Array2::random((500, 8), Uniform::new(-1.0, 1.0))).unwrap();
//! let config = KMeansConfig::new(5).with_seed(42).with_max_steps(100);
//!
//! let mut algorithm = Algorithm::from_config(&data, &config).unwrap();
//! let summary = algorithm.run(config.max_steps);
//! assert!(summary.steps <= 100);
//! ```

mod algorithm;
mod cluster;
mod config;
mod dataset;
mod distance;
mod error;
mod kmeans;

pub use algorithm::{valid_seeds, Algorithm, RunSummary};
pub use cluster::Cluster;
pub use config::{KMeansConfig, Tolerance};
pub use dataset::PointSet;
pub use error::KMeansError;
pub use kmeans::KMeans;
