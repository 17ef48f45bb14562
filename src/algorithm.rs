use crate::cluster::Cluster;
use crate::config::{KMeansConfig, Tolerance};
use crate::dataset::PointSet;
use crate::distance::{compute_centroid_shift, euclidean_distance, find_nearest_centroids};
use crate::error::KMeansError;
use log::{debug, info, trace};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, AsArray};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Outcome of [`Algorithm::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of calls to `step()` that were performed
    pub steps: usize,

    /// Whether the last step reported convergence
    pub converged: bool,
}

/// Returns true if `seeds` is a non-empty list of distinct indices in
/// `0..size`.
pub fn valid_seeds(seeds: &[usize], size: usize) -> bool {
    let mut seen = HashSet::with_capacity(seeds.len());
    !seeds.is_empty() && seeds.iter().all(|&s| s < size && seen.insert(s))
}

/// Drives the k-means iteration over one dataset.
///
/// [`Algorithm::step`] performs one partition/update cycle;
/// [`Algorithm::run`] repeats it until convergence or a step budget runs out.
#[derive(Debug, Clone)]
pub struct Algorithm<'a> {
    dataset: &'a PointSet,
    clusters: Vec<Cluster<'a>>,
}

impl<'a> Algorithm<'a> {
    /// Create the algorithm with `k` clusters.
    ///
    /// With `seeds`, one cluster is created per seed, in order, centered on
    /// `dataset.get(seed)`. Without, `k` distinct points are drawn uniformly
    /// from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is not in `1..=dataset.size()` or the seeds are
    /// empty, duplicated or out of range.
    pub fn new(
        dataset: &'a PointSet,
        k: usize,
        seeds: Option<&[usize]>,
    ) -> Result<Self, KMeansError> {
        Self::with_rng(dataset, k, seeds, &mut rand::thread_rng())
    }

    /// Like [`Algorithm::new`], drawing random seeds from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        dataset: &'a PointSet,
        k: usize,
        seeds: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<Self, KMeansError> {
        let n_samples = dataset.size();

        if k == 0 {
            return Err(KMeansError::InvalidK(
                "k must be greater than 0".to_string(),
            ));
        }

        if n_samples < k {
            return Err(KMeansError::InsufficientData(format!(
                "Number of samples ({}) is less than k ({})",
                n_samples, k
            )));
        }

        let seeds: Vec<usize> = match seeds {
            Some(seeds) => {
                if !valid_seeds(seeds, n_samples) {
                    return Err(KMeansError::InvalidSeeds(format!(
                        "{:?} must be distinct indices below {}",
                        seeds, n_samples
                    )));
                }
                seeds.to_vec()
            }
            None => {
                let indices: Vec<usize> = (0..n_samples).collect();
                indices.choose_multiple(rng, k).cloned().collect()
            }
        };

        debug!("Initial centroids taken from points {:?}", seeds);

        let clusters = seeds
            .iter()
            .map(|&s| Cluster::new(dataset, dataset.get(s)?))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dataset, clusters })
    }

    /// Create the algorithm from a configuration: `config.k` randomly seeded
    /// clusters using `config.seed` (if any) and `config.tolerance`.
    pub fn from_config(dataset: &'a PointSet, config: &KMeansConfig) -> Result<Self, KMeansError> {
        let algorithm = match config.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::with_rng(dataset, config.k, None, &mut rng)?
            }
            None => Self::new(dataset, config.k, None)?,
        };
        Ok(algorithm.with_tolerance(config.tolerance))
    }

    /// Set the convergence tolerance of every cluster.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.clusters = self
            .clusters
            .into_iter()
            .map(|c| c.with_tolerance(tolerance))
            .collect();
        self
    }

    pub fn dataset(&self) -> &'a PointSet {
        self.dataset
    }

    pub fn clusters(&self) -> &[Cluster<'a>] {
        &self.clusters
    }

    /// Number of clusters
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// Snapshot of all centroids, one row per cluster.
    pub fn centroids(&self) -> Array2<f64> {
        let d = self.dataset.dimension();
        Array2::from_shape_fn((self.k(), d), |(i, j)| self.clusters[i].centroid()[j])
    }

    /// Returns the cluster nearest to `point`. Ties go to the cluster that
    /// comes first in [`Algorithm::clusters`].
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidDimensions`] if the point's length differs
    /// from the dataset dimension.
    pub fn nearest_cluster<'p, V>(&self, point: V) -> Result<&Cluster<'a>, KMeansError>
    where
        V: AsArray<'p, f64>,
    {
        let point: ArrayView1<f64> = point.into();
        self.check_dimension(point.len())?;
        Ok(&self.clusters[self.nearest_index(&point)])
    }

    /// Position of the nearest cluster for each row of `data`.
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        self.check_dimension(data.ncols())?;
        Ok(find_nearest_centroids(data, &self.centroids().view()))
    }

    /// Cluster position of every dataset point according to the current
    /// membership, or `None` if some point belongs to no cluster (no partition
    /// has happened yet).
    pub fn labels(&self) -> Option<Array1<usize>> {
        let mut labels = vec![None; self.dataset.size()];
        for (position, cluster) in self.clusters.iter().enumerate() {
            for &index in cluster.member_indices() {
                labels[index] = Some(position);
            }
        }
        labels.into_iter().collect::<Option<Array1<usize>>>()
    }

    /// Performs one partition followed by one centroid update.
    /// Returns true if no centroid moved.
    pub fn step(&mut self) -> bool {
        self.partition();
        self.update()
    }

    /// Calls [`Algorithm::step`] up to `max_steps` times, stopping as soon as
    /// a step reports convergence.
    pub fn run(&mut self, max_steps: usize) -> RunSummary {
        let mut summary = RunSummary {
            steps: 0,
            converged: false,
        };

        for step in 0..max_steps {
            let prev_centroids = self.centroids();
            summary.converged = self.step();
            summary.steps = step + 1;

            let shift = compute_centroid_shift(&prev_centroids.view(), &self.centroids().view());
            debug!("Step {}/{}: shift = {:.6}", step + 1, max_steps, shift);

            if summary.converged {
                info!("Converged after {} steps", summary.steps);
                return summary;
            }
        }

        if max_steps > 0 {
            info!("Stopped after {} steps without converging", max_steps);
        }
        summary
    }

    /// Reassigns every dataset point to exactly one cluster, its nearest.
    fn partition(&mut self) {
        let mut members = vec![Vec::new(); self.k()];
        for (index, point) in self.dataset.contents().outer_iter().enumerate() {
            members[self.nearest_index(&point)].push(index);
        }

        for (cluster, members) in self.clusters.iter_mut().zip(members) {
            cluster.set_members(members);
        }
    }

    /// Recomputes every centroid. Returns true only if all of them were
    /// stable.
    fn update(&mut self) -> bool {
        let moved = self
            .clusters
            .iter_mut()
            .map(|c| c.recompute_centroid())
            .filter(|stable| !stable)
            .count();

        trace!("{} of {} centroids moved", moved, self.k());
        moved == 0
    }

    /// Strict less-than scan, so the earliest cluster wins ties.
    fn nearest_index(&self, point: &ArrayView1<f64>) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;

        for (i, cluster) in self.clusters.iter().enumerate() {
            let dist = euclidean_distance(point, &cluster.centroid());
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }

        best
    }

    fn check_dimension(&self, len: usize) -> Result<(), KMeansError> {
        if len != self.dataset.dimension() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.dataset.dimension(),
                len
            )));
        }
        Ok(())
    }
}
