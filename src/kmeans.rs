use crate::algorithm::{Algorithm, RunSummary};
use crate::config::KMeansConfig;
use crate::dataset::PointSet;
use crate::distance::find_nearest_centroids;
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView2};

/// Batch k-means on top of [`Algorithm`], with a scikit-learn style API.
///
/// Use [`Algorithm`] directly to drive the clustering one step at a time.
///
/// # Example
///
/// ```
/// use stepkmeans_rs::{KMeans, PointSet};
/// use ndarray::Array2;
/// use ndarray_rand::RandomExt;
/// use ndarray_rand::rand_distr::Uniform;
///
/// let data = PointSet::from_array(Array2::random((200, 4), Uniform::new(-1.0, 1.0))).unwrap();
///
/// let mut kmeans = KMeans::new(4, 5);
/// kmeans.train(&data).unwrap();
///
/// let labels = kmeans.predict(&data.contents()).unwrap();
/// assert_eq!(labels.len(), 200);
/// ```
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions)
    d: usize,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f64>>,

    /// Outcome of the last training run
    summary: Option<RunSummary>,
}

impl KMeans {
    /// Create a new instance with default configuration.
    ///
    /// # Arguments
    ///
    /// * `d` - Number of features (dimensions) in the data
    /// * `k` - Number of clusters
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(d: usize, k: usize) -> Self {
        assert!(k > 0, "k must be greater than 0");

        Self {
            config: KMeansConfig::new(k),
            d,
            centroids: None,
            summary: None,
        }
    }

    /// Create a new instance with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            d: 0, // Will be set on first train call
            config,
            centroids: None,
            summary: None,
        }
    }

    /// Train the model on the given dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dataset has fewer points than k
    /// - The dataset dimension doesn't match (for subsequent calls)
    pub fn train(&mut self, data: &PointSet) -> Result<(), KMeansError> {
        let n_features = data.dimension();

        // Set dimensions on first call, validate on subsequent calls
        if self.d == 0 {
            self.d = n_features;
        } else if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let mut algorithm = Algorithm::from_config(data, &self.config)?;
        let summary = algorithm.run(self.config.max_steps);

        self.centroids = Some(algorithm.centroids());
        self.summary = Some(summary);
        Ok(())
    }

    /// Fit the model to the data. Equivalent to `train()`.
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &PointSet) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict cluster assignments for new data of shape (n_samples, d).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Data dimensions don't match the training data
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(find_nearest_centroids(data, &centroids.view()))
    }

    /// Fit the model and predict cluster assignments of the training data.
    pub fn fit_predict(&mut self, data: &PointSet) -> Result<Array1<usize>, KMeansError> {
        self.train(data)?;
        self.predict(&data.contents())
    }

    /// Returns `Some(&Array2<f64>)` if the model has been fitted, `None` otherwise.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.centroids.as_ref()
    }

    /// Number of steps the last training run performed.
    pub fn n_steps(&self) -> Option<usize> {
        self.summary.map(|s| s.steps)
    }

    /// Whether the last training run converged within `max_steps`.
    pub fn converged(&self) -> bool {
        self.summary.map_or(false, |s| s.converged)
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
